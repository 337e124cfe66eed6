pub mod convex_hull;
mod dedup;

#[doc(inline)]
pub use convex_hull::monotone_chain::convex_hull;
#[doc(inline)]
pub use convex_hull::Algorithm;
pub use dedup::dedup;
