use async_trait::async_trait;

/// Storage operations shared by every record kind. Records are created and
/// read back; nothing in this API updates or deletes them.
#[async_trait]
pub trait GenericDao: Send + Sync {
    type Model: Send + Sync + 'static;
    type CreateRequest: Send + Sync + 'static;
    type Error: Send + 'static;
    type ID: Send + Sync + 'static;

    /// Fails with the implementation's not-found error when no record has
    /// this id.
    async fn find_by_id(
        &self, id: Self::ID,
    ) -> Result<Self::Model, Self::Error>;

    async fn all(&self) -> Result<Vec<Self::Model>, Self::Error>;

    async fn create(
        &self, req: Self::CreateRequest,
    ) -> Result<Self::Model, Self::Error>;
}
