//! Edit scripts: model, textual codec, index table and replay check.
//!
//! ## Entry points
//!
//! ```
//! use trackdiff_core::script::{decode_edit_script, replay_check};
//!
//! let source = ['A', 'B'];
//! let target = ['B', 'A'];
//! assert!(replay_check(&source, &target, "m1:1.m1:0."));
//!
//! let table = decode_edit_script("m1:1.m1:0.", 2, 2).unwrap();
//! assert_eq!(table.target_match(0), Some(1));
//! ```

pub mod codec;
pub mod model;
pub mod table;
pub mod verify;

pub use codec::{decode_edit_script, encode_edit_script, parse_edit_script};
pub use model::{EditOp, EditScript};
pub use table::EditTable;
pub use verify::{assert_replay_consistent, replay_check};
