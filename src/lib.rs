//! # mapdec
//!
//! Decoder for the `mappings` field of a JavaScript source map.
//!
//! A mappings string packs VLQ base64 values into `,`-separated segments
//! grouped into `;`-separated lines. Decoding runs in three forward-only
//! stages, each producing the input of the next:
//!
//! 1. [`MappingsDocument::tokenize`] splits the raw string into lines of
//!    raw segments.
//! 2. [`MappingsDocument::decode`] turns every segment into its signed
//!    field deltas.
//! 3. [`DecodedMappings::resolve`] folds the deltas into absolute values:
//!    field 0 starts over on every line, fields 1-4 accumulate across the
//!    whole document.
//!
//! ```
//! use mapdec::MappingsDocument;
//!
//! let document = MappingsDocument::tokenize("AAAA,CAAC;AACA");
//! let resolved = document.decode()?.resolve();
//!
//! assert_eq!(resolved.lines().len(), 2);
//! assert_eq!(resolved.lines()[0][1], vec![1, 0, 0, 1]);
//! # Ok::<(), mapdec::DecodeError>(())
//! ```

mod accumulator;
mod error;
mod mappings;
mod splitter;
mod vlq;

pub use accumulator::*;
pub use error::*;
pub use mappings::*;
