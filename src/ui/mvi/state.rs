/// Marker trait for reducer-owned state.
///
/// `Default` is the state a freshly mounted screen starts in.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
