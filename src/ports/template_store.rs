/// Port for reading bundled template files.
pub trait TemplateStore {
    /// Raw bytes of the file at `path`, relative to the store root.
    fn get(&self, path: &str) -> Option<&[u8]>;
}
