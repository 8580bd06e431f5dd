//! Movies Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::{
    database::{encode_amount, try_get_amount},
    domain::movies::models::{Movie, MovieUuid, NewMovie},
};

const GET_MOVIE_SQL: &str = include_str!("sql/get_movie.sql");
const GET_MOVIE_PRICE_SQL: &str = include_str!("sql/get_movie_price.sql");
const MOVIE_EXISTS_SQL: &str = include_str!("sql/movie_exists.sql");
const CREATE_MOVIE_SQL: &str = include_str!("sql/create_movie.sql");
const UPDATE_MOVIE_PRICE_SQL: &str = include_str!("sql/update_movie_price.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgMoviesRepository;

impl PgMoviesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_movie(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        movie: MovieUuid,
    ) -> Result<Movie, sqlx::Error> {
        query_as::<Postgres, Movie>(GET_MOVIE_SQL)
            .bind(movie.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Current catalog price. Fails with `RowNotFound` for unknown movies.
    pub(crate) async fn get_movie_price(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        movie: MovieUuid,
    ) -> Result<u64, sqlx::Error> {
        let price: i64 = query_scalar(GET_MOVIE_PRICE_SQL)
            .bind(movie.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        u64::try_from(price).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: Box::new(e),
        })
    }

    pub(crate) async fn movie_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        movie: MovieUuid,
    ) -> Result<bool, sqlx::Error> {
        query_scalar(MOVIE_EXISTS_SQL)
            .bind(movie.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_movie(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        movie: NewMovie,
    ) -> Result<Movie, sqlx::Error> {
        query_as::<Postgres, Movie>(CREATE_MOVIE_SQL)
            .bind(movie.uuid.into_uuid())
            .bind(movie.name)
            .bind(movie.description)
            .bind(encode_amount("price", movie.price)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_movie_price(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        movie: MovieUuid,
        price: u64,
    ) -> Result<Movie, sqlx::Error> {
        query_as::<Postgres, Movie>(UPDATE_MOVIE_PRICE_SQL)
            .bind(movie.into_uuid())
            .bind(encode_amount("price", price)?)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Movie {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: MovieUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: try_get_amount(row, "price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
