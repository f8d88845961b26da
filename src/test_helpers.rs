//! Test helpers for creating hermetic plate directories
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::test_helpers::TestPlates;
//!
//! #[test]
//! fn test_plate_loading() {
//!     let plates = TestPlates::new().unwrap();
//!     plates.add_plate("python.py", "def main():\n\tpass\n").unwrap();
//!
//!     // Now load a store from plates.root()
//! }
//! ```
