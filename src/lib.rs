//! # groutline
//!
//! `groutline` hides the visual seams of a tiled mosaic border and replicates
//! settled tile groups across a surface. It is designed to be used in Rust as
//! well as compiled to WebAssembly (WASM), sitting between an external
//! placement driver (which records border events as tiles settle) and an
//! external rendering/duplication driver (which realizes the output geometry).
//!
//! ## Features
//!
//! - **Border tracing**: an append-only [`BorderTrace`] logs directional
//!   placement events with tile corner snapshots, in anti-clockwise order.
//! - **Intrusion detection**: [`IntrusionMatcher`] scans the trace once,
//!   detecting rectangular notches cut into the border outline.
//! - **Occluder synthesis**: [`OccluderSynthesizer`] builds anti-clockwise
//!   margin and intrusion quads that mask the seams, floated a small
//!   z-offset above the tiles.
//! - **Shift inference**: [`ShiftInference`] derives the lattice translation
//!   that reproduces a tile group's spacing pattern, for axis-aligned grids
//!   and diamond zig-zag layouts alike.
//! - **WASM-first**: built with `wasm-bindgen` for seamless integration with
//!   JavaScript and TypeScript.
//!
//! ## Example
//!
//! See the `demos/` directory for SVG plotting of a traced border and its
//! synthesized occluders.
//!
//! ## Main Interface
//!
//! The primary entry point is the [`BorderOccluder`] session, which owns one
//! border trace and turns it into occluder quads; [`ShiftInference`] is the
//! independent duplication half.

mod direction;
mod error;
mod matcher;
mod occluder;
mod shift;
mod synthesis;
mod trace;
mod wasm;

pub use direction::Direction;
pub use error::Error;
pub use matcher::IntrusionMatch;
pub use matcher::IntrusionMatcher;
pub use matcher::ScanOutcome;
pub use occluder::BorderOccluder;
pub use shift::DEFAULT_TOLERANCE;
pub use shift::ShiftInference;
pub use synthesis::DEFAULT_MARGIN_WIDTH;
pub use synthesis::DEFAULT_Z_OFFSET;
pub use synthesis::OccluderKind;
pub use synthesis::OccluderQuad;
pub use synthesis::OccluderSynthesizer;
pub use synthesis::Ordinal;
pub use synthesis::ordinal_corner;
pub use trace::BorderTrace;
pub use trace::TraceRecord;
pub use wasm::BorderSession;
