/// Side effects requested by [`crate::update`] and executed by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Run one repository fetch and report back with `Msg::DataLoaded`.
    FetchRepositories,
}
