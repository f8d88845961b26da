//! Template engine: parses placeholder markers and renders boilerplate text
//!
//! A template may carry any of these literal markers:
//!
//! * `{BP_NAME}` - replaced by the artifact name
//! * `{BP_FUNC_BEG}` ... `{BP_FUNC_END}` - a function prototype containing
//!   `{BP_FNAME}`, cloned once per requested function
//! * `{BP_BREAK_BEG}{BP_ALT_BEG}..{BP_ALT_END}{BP_LINE_BEG}..{BP_LINE_END}{BP_BREAK_END}` -
//!   a compact and a line-broken rendering of the same boundary
//!
//! Every marker is optional. A template without markers renders unchanged.

use crate::models::GenerateOptions;
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

struct Markers {
    name: Regex,
    fname: Regex,
    func: Regex,
    brk: Regex,
}

static MARKERS: LazyLock<Markers> = LazyLock::new(|| Markers {
    name: Regex::new(r"\{BP_NAME\}").unwrap(),
    fname: Regex::new(r"\{BP_FNAME\}").unwrap(),
    // One line terminator on each outer side of the block belongs to the block
    func: Regex::new(r"(?s)(?:\r?\n)?\{BP_FUNC_BEG\}(.*?)\{BP_FUNC_END\}(?:\r?\n)?").unwrap(),
    brk: Regex::new(
        r"(?s)\{BP_BREAK_BEG\}\s*?\{BP_ALT_BEG\}(.*?)\{BP_ALT_END\}\s*?\{BP_LINE_BEG\}(.*?)\{BP_LINE_END\}\s*?\{BP_BREAK_END\}",
    )
    .unwrap(),
});

/// A parsed template ready to generate boilerplate
#[derive(Debug, Clone, PartialEq)]
pub struct Plate {
    template: String,
    function: Option<String>,
}

impl Plate {
    /// Parse a template, extracting the function prototype if there is one.
    ///
    /// Only the first `{BP_FUNC_BEG}`/`{BP_FUNC_END}` pair is recognized;
    /// any later pair is left in the text as-is.
    pub fn parse(template: impl Into<String>) -> Self {
        let template = template.into();
        let function = MARKERS
            .func
            .captures(&template)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());

        Self { template, function }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// The function prototype, still carrying its `{BP_FNAME}` marker
    pub fn prototype(&self) -> Option<&str> {
        self.function.as_deref()
    }

    pub fn has_functions(&self) -> bool {
        self.function.is_some()
    }

    /// Render the template.
    ///
    /// Steps run in a fixed order: name, functions, tabs, breaks. Tabs are
    /// expanded before breaks are resolved so both alternatives of a break
    /// carry the same indentation.
    pub fn generate(&self, options: &GenerateOptions) -> String {
        let name = options.effective_name();

        let mut text = MARKERS
            .name
            .replace_all(&self.template, NoExpand(name))
            .into_owned();

        if let Some(prototype) = &self.function {
            let prototype = MARKERS.name.replace_all(prototype, NoExpand(name));
            let functions: String = options
                .functions
                .iter()
                .map(|func| MARKERS.fname.replace_all(&prototype, NoExpand(func)).into_owned())
                .collect();
            text = MARKERS
                .func
                .replacen(&text, 1, NoExpand(&functions))
                .into_owned();
        }

        if options.spaces > 0 {
            text = expand_tabs(&text, options.spaces);
        }

        resolve_breaks(&text, options.newlines)
    }
}

/// Replace every tab with `spaces` space characters
pub fn expand_tabs(text: &str, spaces: usize) -> String {
    text.replace('\t', &" ".repeat(spaces))
}

/// Replace every break region with one of its alternatives.
///
/// Text without break markers is returned unchanged, so running this on
/// already-resolved output is a no-op.
pub fn resolve_breaks(text: &str, newlines: bool) -> String {
    let replacement = if newlines { "${2}" } else { "${1}" };
    MARKERS.brk.replace_all(text, replacement).into_owned()
}
