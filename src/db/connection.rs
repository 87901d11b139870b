use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, Document},
    error::Result,
    options::FindOptions,
    results::{DeleteResult, InsertOneResult, UpdateResult},
    Client, Collection,
};
use std::env;

use crate::models::{like_model::Like, room_model::Room};

/// Number of postings shown on the homepage teaser.
const HOME_ROOM_LIMIT: i64 = 6;

pub struct Database {
    pub rooms: Collection<Room>,
    pub likes: Collection<Like>,
}

impl Database {
    pub async fn init() -> Result<Self> {
        let db_url = env::var("MONGODB_URI").expect("❌ MONGODB_URI not found in .env");
        let client = Client::with_uri_str(&db_url).await?;

        let db_name = env::var("DB_NAME").unwrap_or_else(|_| "roommate".to_string());
        let db = client.database(&db_name);

        let rooms: Collection<Room> = db.collection("rooms");
        let likes: Collection<Like> = db.collection("likes");

        Ok(Database { rooms, likes })
    }

    pub async fn create_room(&self, mut room: Room) -> Result<InsertOneResult> {
        room._id.get_or_insert_with(ObjectId::new);
        self.rooms.insert_one(room, None).await
    }

    pub async fn all_rooms(&self) -> Result<Vec<Room>> {
        self.rooms.find(None, None).await?.try_collect().await
    }

    pub async fn home_rooms(&self) -> Result<Vec<Room>> {
        let options = FindOptions::builder().limit(HOME_ROOM_LIMIT).build();
        self.rooms.find(None, options).await?.try_collect().await
    }

    /// An absent email filters on null, which only matches documents
    /// without an email field.
    pub async fn rooms_by_email(&self, email: Option<&str>) -> Result<Vec<Room>> {
        let filter = match email {
            Some(email) => doc! { "email": email },
            None => doc! { "email": Bson::Null },
        };
        self.rooms.find(filter, None).await?.try_collect().await
    }

    pub async fn room_by_id(&self, id: ObjectId) -> Result<Option<Room>> {
        self.rooms.find_one(doc! { "_id": id }, None).await
    }

    pub async fn update_room(&self, id: ObjectId, patch: Document) -> Result<UpdateResult> {
        self.rooms
            .update_one(doc! { "_id": id }, doc! { "$set": patch }, None)
            .await
    }

    pub async fn delete_room(&self, id: ObjectId) -> Result<DeleteResult> {
        self.rooms.delete_one(doc! { "_id": id }, None).await
    }

    pub async fn find_like(&self, post_id: &str, user_id: &str) -> Result<Option<Like>> {
        self.likes
            .find_one(doc! { "postId": post_id, "userId": user_id }, None)
            .await
    }

    pub async fn insert_like(&self, post_id: &str, user_id: &str) -> Result<InsertOneResult> {
        let like = Like {
            _id: Some(ObjectId::new()),
            post_id: post_id.to_string(),
            user_id: user_id.to_string(),
        };
        self.likes.insert_one(like, None).await
    }

    pub async fn delete_like(&self, post_id: &str, user_id: &str) -> Result<DeleteResult> {
        self.likes
            .delete_one(doc! { "postId": post_id, "userId": user_id }, None)
            .await
    }

    pub async fn count_likes(&self, post_id: &str) -> Result<u64> {
        self.likes
            .count_documents(doc! { "postId": post_id }, None)
            .await
    }
}
