pub mod config;
pub mod models;
pub mod schema;

use std::cell::RefCell;

use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;
use tracing::debug;

use tonada_core::domain::report::{
  ArtistCustomerSpend, ArtistTrackCount, CityRevenue, CountryInvoiceCount, CountryTopGenre,
  CountryTopSpender, CustomerSpend, GenreListener, InvoiceTotal, SeniorEmployee, TrackDuration,
};
use tonada_core::errors::CoreError;
use tonada_core::ports::ReportCatalog;

use crate::models::{
  ArtistCustomerSpendRow, ArtistTrackCountRow, CityRevenueRow, CountryInvoiceCountRow,
  CountryTopGenreRow, CountryTopSpenderRow, CustomerSpendRow, EmployeeRow, GenreListenerRow,
  InvoiceRow, TrackDurationRow,
};

pub use crate::config::StorageConfig;

/// Nombre de género que definen los reportes de Rock. La comparación es
/// exacta y sensible a mayúsculas ("rock" o "ROCK" no cuentan).
const ROCK_GENRE: &str = "Rock";

/// Adaptador SQLite del puerto [`ReportCatalog`].
///
/// Solo lectura: ninguna consulta muta datos. Una conexión síncrona por
/// catálogo; cada invocación es independiente de las demás.
pub struct SqliteReportCatalog {
  conn: RefCell<SqliteConnection>,
}

impl SqliteReportCatalog {
  pub fn new(database_url: &str) -> Result<Self, CoreError> {
    let conn = SqliteConnection::establish(database_url)
      .map_err(|e| CoreError::Repository(e.to_string()))?;
    Ok(Self { conn: RefCell::new(conn) })
  }

  /// Envuelve una conexión ya establecida (harness de pruebas, pools
  /// externos). El catálogo asume que el esquema ya existe.
  pub fn from_connection(conn: SqliteConnection) -> Self {
    Self { conn: RefCell::new(conn) }
  }
}

fn repo_err(e: diesel::result::Error) -> CoreError {
  CoreError::Repository(e.to_string())
}

impl ReportCatalog for SqliteReportCatalog {
  fn senior_employee(&self) -> Result<Option<SeniorEmployee>, CoreError> {
    use crate::schema::employees::dsl::*;

    let mut conn = self.conn.borrow_mut();
    let row = employees
      .order(level.desc())
      .first::<EmployeeRow>(&mut *conn)
      .optional()
      .map_err(repo_err)?;

    debug!(found = row.is_some(), "senior_employee");

    Ok(row.map(|r| SeniorEmployee {
      first_name: r.first_name,
      last_name: r.last_name,
      title: r.title,
      level: r.level,
    }))
  }

  fn invoices_by_country(&self) -> Result<Vec<CountryInvoiceCount>, CoreError> {
    const SQL: &str = "\
      SELECT billing_country AS country, COUNT(*) AS invoice_count \
      FROM invoices \
      GROUP BY billing_country \
      ORDER BY invoice_count DESC";

    let mut conn = self.conn.borrow_mut();
    let rows = sql_query(SQL).load::<CountryInvoiceCountRow>(&mut *conn).map_err(repo_err)?;

    debug!(rows = rows.len(), "invoices_by_country");

    Ok(
      rows
        .into_iter()
        .map(|r| CountryInvoiceCount { country: r.country, invoice_count: r.invoice_count })
        .collect(),
    )
  }

  fn top_invoice_totals(&self) -> Result<Vec<InvoiceTotal>, CoreError> {
    use crate::schema::invoices::dsl::*;

    let mut conn = self.conn.borrow_mut();
    let rows =
      invoices.order(total.desc()).limit(3).load::<InvoiceRow>(&mut *conn).map_err(repo_err)?;

    debug!(rows = rows.len(), "top_invoice_totals");

    Ok(
      rows
        .into_iter()
        .map(|r| InvoiceTotal { invoice_id: r.id, billing_country: r.billing_country, total: r.total })
        .collect(),
    )
  }

  fn best_revenue_city(&self) -> Result<Option<CityRevenue>, CoreError> {
    const SQL: &str = "\
      SELECT billing_city AS city, SUM(total) AS revenue \
      FROM invoices \
      GROUP BY billing_city \
      ORDER BY revenue DESC \
      LIMIT 1";

    let mut conn = self.conn.borrow_mut();
    let rows = sql_query(SQL).load::<CityRevenueRow>(&mut *conn).map_err(repo_err)?;

    debug!(found = !rows.is_empty(), "best_revenue_city");

    Ok(rows.into_iter().next().map(|r| CityRevenue { city: r.city, revenue: r.revenue }))
  }

  fn best_customer(&self) -> Result<Option<CustomerSpend>, CoreError> {
    const SQL: &str = "\
      SELECT c.id AS customer_id, c.first_name AS first_name, c.last_name AS last_name, \
             SUM(i.total) AS total_spent \
      FROM customers c \
      JOIN invoices i ON i.customer_id = c.id \
      GROUP BY c.id, c.first_name, c.last_name \
      ORDER BY total_spent DESC \
      LIMIT 1";

    let mut conn = self.conn.borrow_mut();
    let rows = sql_query(SQL).load::<CustomerSpendRow>(&mut *conn).map_err(repo_err)?;

    debug!(found = !rows.is_empty(), "best_customer");

    Ok(rows.into_iter().next().map(|r| CustomerSpend {
      customer_id: r.customer_id,
      first_name: r.first_name,
      last_name: r.last_name,
      total_spent: r.total_spent,
    }))
  }

  fn rock_listeners(&self) -> Result<Vec<GenreListener>, CoreError> {
    const SQL: &str = "\
      SELECT DISTINCT c.email AS email, c.first_name AS first_name, c.last_name AS last_name \
      FROM customers c \
      JOIN invoices i ON i.customer_id = c.id \
      JOIN invoice_lines il ON il.invoice_id = i.id \
      JOIN tracks t ON t.id = il.track_id \
      JOIN genres g ON g.id = t.genre_id \
      WHERE g.name = ? \
      ORDER BY c.email ASC";

    let mut conn = self.conn.borrow_mut();
    let rows = sql_query(SQL)
      .bind::<Text, _>(ROCK_GENRE)
      .load::<GenreListenerRow>(&mut *conn)
      .map_err(repo_err)?;

    debug!(rows = rows.len(), "rock_listeners");

    Ok(
      rows
        .into_iter()
        .map(|r| GenreListener { email: r.email, first_name: r.first_name, last_name: r.last_name })
        .collect(),
    )
  }

  fn top_rock_bands(&self) -> Result<Vec<ArtistTrackCount>, CoreError> {
    const SQL: &str = "\
      SELECT ar.name AS artist_name, COUNT(*) AS track_count \
      FROM artists ar \
      JOIN albums al ON al.artist_id = ar.id \
      JOIN tracks t ON t.album_id = al.id \
      JOIN genres g ON g.id = t.genre_id \
      WHERE g.name = ? \
      GROUP BY ar.id, ar.name \
      ORDER BY track_count DESC \
      LIMIT 10";

    let mut conn = self.conn.borrow_mut();
    let rows = sql_query(SQL)
      .bind::<Text, _>(ROCK_GENRE)
      .load::<ArtistTrackCountRow>(&mut *conn)
      .map_err(repo_err)?;

    debug!(rows = rows.len(), "top_rock_bands");

    Ok(
      rows
        .into_iter()
        .map(|r| ArtistTrackCount { artist_name: r.artist_name, track_count: r.track_count })
        .collect(),
    )
  }

  fn above_average_tracks(&self) -> Result<Vec<TrackDuration>, CoreError> {
    // Estrictamente mayor que el promedio: una pista exactamente en la
    // media queda fuera. Con la tabla vacía el AVG es NULL y no sale nada.
    const SQL: &str = "\
      SELECT name AS track_name, milliseconds AS milliseconds \
      FROM tracks \
      WHERE milliseconds > (SELECT AVG(milliseconds) FROM tracks) \
      ORDER BY milliseconds DESC";

    let mut conn = self.conn.borrow_mut();
    let rows = sql_query(SQL).load::<TrackDurationRow>(&mut *conn).map_err(repo_err)?;

    debug!(rows = rows.len(), "above_average_tracks");

    Ok(
      rows
        .into_iter()
        .map(|r| TrackDuration { track_name: r.track_name, milliseconds: r.milliseconds })
        .collect(),
    )
  }

  fn spend_on_top_artist(&self) -> Result<Vec<ArtistCustomerSpend>, CoreError> {
    // El artista más vendido se decide por la suma de precios extendidos
    // (unit_price * quantity) de sus líneas de factura; ante empate gana
    // el primero que produzca el motor.
    const SQL: &str = "\
      WITH best_selling_artist AS ( \
        SELECT ar.id AS artist_id, ar.name AS artist_name, \
               SUM(il.unit_price * il.quantity) AS total_sales \
        FROM invoice_lines il \
        JOIN tracks t ON t.id = il.track_id \
        JOIN albums al ON al.id = t.album_id \
        JOIN artists ar ON ar.id = al.artist_id \
        GROUP BY ar.id, ar.name \
        ORDER BY total_sales DESC \
        LIMIT 1 \
      ) \
      SELECT c.id AS customer_id, c.first_name AS first_name, c.last_name AS last_name, \
             bsa.artist_name AS artist_name, \
             SUM(il.unit_price * il.quantity) AS amount_spent \
      FROM invoices i \
      JOIN customers c ON c.id = i.customer_id \
      JOIN invoice_lines il ON il.invoice_id = i.id \
      JOIN tracks t ON t.id = il.track_id \
      JOIN albums al ON al.id = t.album_id \
      JOIN best_selling_artist bsa ON bsa.artist_id = al.artist_id \
      GROUP BY c.id, c.first_name, c.last_name, bsa.artist_name \
      ORDER BY amount_spent DESC";

    let mut conn = self.conn.borrow_mut();
    let rows = sql_query(SQL).load::<ArtistCustomerSpendRow>(&mut *conn).map_err(repo_err)?;

    debug!(rows = rows.len(), "spend_on_top_artist");

    Ok(
      rows
        .into_iter()
        .map(|r| ArtistCustomerSpend {
          customer_id: r.customer_id,
          first_name: r.first_name,
          last_name: r.last_name,
          artist_name: r.artist_name,
          amount_spent: r.amount_spent,
        })
        .collect(),
    )
  }

  fn top_genre_per_country(&self) -> Result<Vec<CountryTopGenre>, CoreError> {
    // Máximo inclusivo por país: se comparan los conteos contra el MAX del
    // grupo, de modo que todos los géneros empatados aparecen.
    const SQL: &str = "\
      WITH genre_purchases AS ( \
        SELECT c.country AS country, g.name AS genre_name, COUNT(*) AS purchase_count \
        FROM customers c \
        JOIN invoices i ON i.customer_id = c.id \
        JOIN invoice_lines il ON il.invoice_id = i.id \
        JOIN tracks t ON t.id = il.track_id \
        JOIN genres g ON g.id = t.genre_id \
        GROUP BY c.country, g.name \
      ) \
      SELECT gp.country AS country, gp.genre_name AS genre_name, \
             gp.purchase_count AS purchase_count \
      FROM genre_purchases gp \
      JOIN ( \
        SELECT country, MAX(purchase_count) AS max_count \
        FROM genre_purchases \
        GROUP BY country \
      ) best ON best.country = gp.country AND gp.purchase_count = best.max_count \
      ORDER BY gp.country ASC, gp.genre_name ASC";

    let mut conn = self.conn.borrow_mut();
    let rows = sql_query(SQL).load::<CountryTopGenreRow>(&mut *conn).map_err(repo_err)?;

    debug!(rows = rows.len(), "top_genre_per_country");

    Ok(
      rows
        .into_iter()
        .map(|r| CountryTopGenre {
          country: r.country,
          genre_name: r.genre_name,
          purchase_count: r.purchase_count,
        })
        .collect(),
    )
  }

  fn top_spender_per_country(&self) -> Result<Vec<CountryTopSpender>, CoreError> {
    // Formulación por ranking: RANK() comparte el puesto 1 entre empatados,
    // así que filtrar por rango 1 devuelve todos los máximos del país.
    // Equivale al join contra el MAX por grupo de top_genre_per_country.
    const SQL: &str = "\
      WITH country_spend AS ( \
        SELECT i.billing_country AS country, c.id AS customer_id, \
               c.first_name AS first_name, c.last_name AS last_name, \
               SUM(i.total) AS total_spent, \
               RANK() OVER ( \
                 PARTITION BY i.billing_country ORDER BY SUM(i.total) DESC \
               ) AS spend_rank \
        FROM invoices i \
        JOIN customers c ON c.id = i.customer_id \
        GROUP BY i.billing_country, c.id, c.first_name, c.last_name \
      ) \
      SELECT country, customer_id, first_name, last_name, total_spent \
      FROM country_spend \
      WHERE spend_rank = 1 \
      ORDER BY country ASC, total_spent DESC";

    let mut conn = self.conn.borrow_mut();
    let rows = sql_query(SQL).load::<CountryTopSpenderRow>(&mut *conn).map_err(repo_err)?;

    debug!(rows = rows.len(), "top_spender_per_country");

    Ok(
      rows
        .into_iter()
        .map(|r| CountryTopSpender {
          country: r.country,
          customer_id: r.customer_id,
          first_name: r.first_name,
          last_name: r.last_name,
          total_spent: r.total_spent,
        })
        .collect(),
    )
  }
}
