use crate::config::MongoSettings;
use crate::core::RecordSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

/// Reads team records from a MongoDB collection.
pub struct MongoSource {
    client: Client,
    collection: Collection<Document>,
}

impl MongoSource {
    pub async fn connect(settings: &MongoSettings) -> Result<Self> {
        let mut options = ClientOptions::parse(&settings.uri).await?;
        options.app_name = Some(settings.app_name.clone());
        options.server_selection_timeout = Some(settings.timeout);

        let client = Client::with_options(options)?;
        let collection = client
            .database(&settings.database)
            .collection::<Document>(&settings.collection);

        tracing::debug!(
            "Bound collection {}.{}",
            settings.database,
            settings.collection
        );

        Ok(Self { client, collection })
    }
}

#[async_trait]
impl RecordSource for MongoSource {
    async fn ping(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Document>> {
        let document = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(document)
    }

    async fn disconnect(&self) {
        // clones share one topology, shutting one down closes it for all
        self.client.clone().shutdown().await;
        tracing::debug!("MongoDB client shut down");
    }
}
