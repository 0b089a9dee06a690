/// Identifier of a record as the REST backend addresses it in URLs
/// and in bulk-delete bodies.
pub trait RecordId {
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;
}

impl RecordId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }
}

impl RecordId for String {
    fn as_string(&self) -> String {
        self.clone()
    }
}
