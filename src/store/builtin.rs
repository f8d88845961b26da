//! Plates embedded at compile time from the `plates/` directory.
//!
//! Entries use the same `name[,name2].ext1[.ext2...]` file names as a plates
//! directory, so they go through the same key parsing.

pub const PLATES: &[(&str, &str)] = &[
    ("bash,sh.sh", include_str!("../../plates/bash,sh.sh")),
    ("c++,cpp.cpp.cc.cxx.hpp", include_str!("../../plates/c++,cpp.cpp.cc.cxx.hpp")),
    ("c.c.h", include_str!("../../plates/c.c.h")),
    ("html5,html.html.htm", include_str!("../../plates/html5,html.html.htm")),
    ("java.java", include_str!("../../plates/java.java")),
    ("python.py", include_str!("../../plates/python.py")),
    ("python2.py", include_str!("../../plates/python2.py")),
    ("python3.py", include_str!("../../plates/python3.py")),
    ("rust.rs", include_str!("../../plates/rust.rs")),
];
