/// Read-only access to a view's payload
pub trait Container {
    /// The wrapped payload type
    type Payload;

    /// Returns the wrapped payload unchanged
    fn value(&self) -> &Self::Payload;

    /// Consumes the view, returning its payload
    fn into_value(self) -> Self::Payload;
}
