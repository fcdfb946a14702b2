use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{ClientOptions, IndexOptions, ServerApi, ServerApiVersion},
    Client, Collection, IndexModel,
};
use std::sync::Arc;
use std::time::Duration;

use crate::errors::ServiceError;
use crate::models::bookings::{Booking, BookingStatus};
use crate::services::booking_repository::BookingRepository;

const BOOKINGS_COLLECTION: &str = "Bookings";

pub async fn create_mongo_client(uri: &str) -> Result<Arc<Client>, mongodb::error::Error> {
    log::info!("Connecting to MongoDB");

    let mut client_options = ClientOptions::parse(uri).await?;

    client_options.connect_timeout = Some(Duration::from_secs(10));
    client_options.server_selection_timeout = Some(Duration::from_secs(10));
    client_options.max_pool_size = Some(10);
    client_options.min_pool_size = Some(1);

    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);

    let client = Client::with_options(client_options)?;

    match client.database("admin").run_command(doc! {"ping": 1}).await {
        Ok(_) => log::info!("Successfully connected to MongoDB and verified with ping command"),
        Err(e) => {
            log::warn!("Connected to MongoDB but ping test failed: {}", e);
            log::warn!("The API may still work, but booking storage might be impaired");
        }
    }

    Ok(Arc::new(client))
}

/// Bookings stored in `<database>.Bookings`, keyed by the generated booking id.
pub struct MongoBookingRepository {
    collection: Collection<Booking>,
}

impl MongoBookingRepository {
    pub async fn new(client: Arc<Client>, database: &str) -> Result<Self, mongodb::error::Error> {
        let collection: Collection<Booking> =
            client.database(database).collection(BOOKINGS_COLLECTION);

        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        collection.create_index(index).await?;

        Ok(Self { collection })
    }
}

#[async_trait]
impl BookingRepository for MongoBookingRepository {
    async fn create(&self, booking: Booking) -> Result<Booking, ServiceError> {
        // Field names follow the camelCase wire format; dates are ISO strings, so
        // string order is date order.
        // TODO: run the overlap check and insert inside a session transaction once
        // deployments run on a replica set; two concurrent creates can both pass the check.
        let overlap = doc! {
            "propertyId": booking.property_id.as_str(),
            "roomId": booking.room_id.as_str(),
            "status": { "$ne": BookingStatus::Cancelled.as_str() },
            "checkIn": { "$lt": booking.check_out.to_string() },
            "checkOut": { "$gt": booking.check_in.to_string() },
        };

        if self.collection.find_one(overlap).await?.is_some() {
            return Err(ServiceError::Conflict(
                "Room is already booked for these dates".to_string(),
            ));
        }

        self.collection.insert_one(&booking).await?;
        Ok(booking)
    }

    async fn get(&self, id: &str) -> Result<Option<Booking>, ServiceError> {
        Ok(self.collection.find_one(doc! { "id": id }).await?)
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>, ServiceError> {
        let cursor = self.collection.find(doc! { "userEmail": email }).await?;
        let bookings: Vec<Booking> = cursor.try_collect().await?;
        Ok(bookings)
    }

    fn backend(&self) -> &'static str {
        "mongodb"
    }
}
