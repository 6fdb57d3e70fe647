use uuid::Uuid;

/// Source of fresh entity ids.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

impl<T: IdGenerator + ?Sized> IdGenerator for &T {
    fn next_id(&self) -> String {
        (*self).next_id()
    }
}

/// Random v4 UUIDs, the production id scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
