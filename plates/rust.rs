{BP_FUNC_BEG}fn {BP_FNAME}(){BP_BREAK_BEG}{BP_ALT_BEG} {BP_ALT_END}{BP_LINE_BEG}
{BP_LINE_END}{BP_BREAK_END}{
	todo!()
}

{BP_FUNC_END}fn main(){BP_BREAK_BEG}{BP_ALT_BEG} {BP_ALT_END}{BP_LINE_BEG}
{BP_LINE_END}{BP_BREAK_END}{
	println!("Hello from {BP_NAME}");
}
