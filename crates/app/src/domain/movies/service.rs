//! Catalog service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::movies::{
        errors::CatalogServiceError,
        models::{Movie, MovieUuid, NewMovie},
        repository::PgMoviesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCatalogService {
    db: Db,
    repository: PgMoviesRepository,
}

impl PgCatalogService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgMoviesRepository::new(),
        }
    }
}

#[async_trait]
impl CatalogService for PgCatalogService {
    async fn get_movie(&self, movie: MovieUuid) -> Result<Movie, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let movie = self.repository.get_movie(&mut tx, movie).await?;

        tx.commit().await?;

        Ok(movie)
    }

    async fn movie_price(&self, movie: MovieUuid) -> Result<u64, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let price = self.repository.get_movie_price(&mut tx, movie).await?;

        tx.commit().await?;

        Ok(price)
    }

    async fn movie_exists(&self, movie: MovieUuid) -> Result<bool, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let exists = self.repository.movie_exists(&mut tx, movie).await?;

        tx.commit().await?;

        Ok(exists)
    }

    async fn create_movie(&self, movie: NewMovie) -> Result<Movie, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_movie(&mut tx, movie).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_movie_price(
        &self,
        movie: MovieUuid,
        price: u64,
    ) -> Result<Movie, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_movie_price(&mut tx, movie, price)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieve a single movie.
    async fn get_movie(&self, movie: MovieUuid) -> Result<Movie, CatalogServiceError>;

    /// Current price of a movie.
    async fn movie_price(&self, movie: MovieUuid) -> Result<u64, CatalogServiceError>;

    /// Whether the movie is in the catalog.
    async fn movie_exists(&self, movie: MovieUuid) -> Result<bool, CatalogServiceError>;

    /// Adds a movie to the catalog.
    async fn create_movie(&self, movie: NewMovie) -> Result<Movie, CatalogServiceError>;

    /// Changes the current price. Cart lines already holding the movie keep
    /// the price they were quoted.
    async fn update_movie_price(
        &self,
        movie: MovieUuid,
        price: u64,
    ) -> Result<Movie, CatalogServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn new_movie(price: u64) -> NewMovie {
        NewMovie {
            uuid: MovieUuid::new(),
            name: "Heat".to_string(),
            description: "Crime drama".to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn create_movie_returns_name_and_price() -> TestResult {
        let ctx = TestContext::new().await;
        let movie = new_movie(12);

        let created = ctx.catalog.create_movie(movie.clone()).await?;

        assert_eq!(created.uuid, movie.uuid);
        assert_eq!(created.name, "Heat");
        assert_eq!(created.price, 12);

        Ok(())
    }

    #[tokio::test]
    async fn movie_price_reflects_latest_update() -> TestResult {
        let ctx = TestContext::new().await;
        let movie = ctx.catalog.create_movie(new_movie(12)).await?;

        ctx.catalog.update_movie_price(movie.uuid, 15).await?;

        assert_eq!(ctx.catalog.movie_price(movie.uuid).await?, 15);

        Ok(())
    }

    #[tokio::test]
    async fn movie_exists_distinguishes_known_and_unknown() -> TestResult {
        let ctx = TestContext::new().await;
        let movie = ctx.catalog.create_movie(new_movie(12)).await?;

        assert!(ctx.catalog.movie_exists(movie.uuid).await?);
        assert!(!ctx.catalog.movie_exists(MovieUuid::new()).await?);

        Ok(())
    }

    #[tokio::test]
    async fn movie_price_unknown_movie_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.catalog.movie_price(MovieUuid::new()).await;

        assert!(
            matches!(result, Err(CatalogServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
