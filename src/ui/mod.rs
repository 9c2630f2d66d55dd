/// Presentation helpers
///
/// Stateless widget builders for the two structured parts of the page:
/// - The result cards and summary/insight blocks (cards.rs)
/// - The image drop/click target (dropzone.rs)

pub mod cards;
pub mod dropzone;
