//! Books service

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    repository::books::BookStore,
};

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.store.list().await
    }

    /// Get a book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.store.get_by_id(id).await
    }

    /// Create a book
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.store.create(data).await
    }

    /// Overwrite a book's title, author and description
    pub async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<Book> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.store.update(id, data).await
    }

    /// Delete a book
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use super::*;
    use crate::repository::books::MockBookStore;

    fn sample_book(id: i64) -> Book {
        let now = Utc::now();
        Book {
            id,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            description: "Desert planet epic".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_rejects_blank_title_without_touching_store() {
        let mut store = MockBookStore::new();
        store.expect_create().never();
        let service = BooksService::new(Arc::new(store));

        let data = CreateBook {
            title: "   ".to_string(),
            author: "Frank Herbert".to_string(),
            description: "Desert planet epic".to_string(),
        };

        let err = service.create(&data).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn create_passes_valid_data_to_store() {
        let mut store = MockBookStore::new();
        store
            .expect_create()
            .withf(|data| data.title == "Dune")
            .returning(|_| Ok(sample_book(1)));
        let service = BooksService::new(Arc::new(store));

        let data = CreateBook {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            description: "Desert planet epic".to_string(),
        };

        let book = service.create(&data).await.unwrap();
        assert_eq!(book.id, 1);
    }

    #[tokio::test]
    async fn update_rejects_blank_author_without_touching_store() {
        let mut store = MockBookStore::new();
        store.expect_update().never();
        let service = BooksService::new(Arc::new(store));

        let data = UpdateBook {
            title: "Dune".to_string(),
            author: "".to_string(),
            description: "Desert planet epic".to_string(),
        };

        let err = service.update(1, &data).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_propagates_not_found_from_store() {
        let mut store = MockBookStore::new();
        store
            .expect_delete()
            .returning(|id| Err(AppError::NotFound(format!("Book {} not found", id))));
        let service = BooksService::new(Arc::new(store));

        let err = service.delete(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
