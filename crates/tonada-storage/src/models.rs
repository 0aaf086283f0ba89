use crate::schema::{albums, artists, customers, employees, genres, invoice_lines, invoices, tracks};

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Integer, Text};

// ---------------------------------------------------------------------------
// Table rows
// ---------------------------------------------------------------------------

#[derive(Debug, Queryable)]
pub struct EmployeeRow {
  pub id: i32,
  pub first_name: String,
  pub last_name: String,
  pub title: String,
  pub level: String,
  pub reports_to: Option<i32>,
}

#[derive(Debug, Queryable)]
pub struct InvoiceRow {
  pub id: i32,
  pub customer_id: i32,
  pub invoice_date: String,
  pub billing_address: Option<String>,
  pub billing_city: String,
  pub billing_country: String,
  pub total: f64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = artists)]
pub struct NewArtistRow {
  pub id: i32,
  pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = albums)]
pub struct NewAlbumRow {
  pub id: i32,
  pub title: String,
  pub artist_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = genres)]
pub struct NewGenreRow {
  pub id: i32,
  pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = tracks)]
pub struct NewTrackRow {
  pub id: i32,
  pub name: String,
  pub album_id: Option<i32>,
  pub genre_id: Option<i32>,
  pub milliseconds: i32,
  pub unit_price: f64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = customers)]
pub struct NewCustomerRow {
  pub id: i32,
  pub first_name: String,
  pub last_name: String,
  pub company: Option<String>,
  pub address: Option<String>,
  pub city: Option<String>,
  pub country: String,
  pub phone: Option<String>,
  pub email: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = invoices)]
pub struct NewInvoiceRow {
  pub id: i32,
  pub customer_id: i32,
  pub invoice_date: String,
  pub billing_address: Option<String>,
  pub billing_city: String,
  pub billing_country: String,
  pub total: f64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = invoice_lines)]
pub struct NewInvoiceLineRow {
  pub id: i32,
  pub invoice_id: i32,
  pub track_id: i32,
  pub unit_price: f64,
  pub quantity: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = employees)]
pub struct NewEmployeeRow {
  pub id: i32,
  pub first_name: String,
  pub last_name: String,
  pub title: String,
  pub level: String,
  pub reports_to: Option<i32>,
}

// ---------------------------------------------------------------------------
// Report rows (raw SQL results; aliases in the SQL match the field names)
// ---------------------------------------------------------------------------

#[derive(Debug, QueryableByName)]
pub struct CountryInvoiceCountRow {
  #[diesel(sql_type = Text)]
  pub country: String,
  #[diesel(sql_type = BigInt)]
  pub invoice_count: i64,
}

#[derive(Debug, QueryableByName)]
pub struct CityRevenueRow {
  #[diesel(sql_type = Text)]
  pub city: String,
  #[diesel(sql_type = Double)]
  pub revenue: f64,
}

#[derive(Debug, QueryableByName)]
pub struct CustomerSpendRow {
  #[diesel(sql_type = Integer)]
  pub customer_id: i32,
  #[diesel(sql_type = Text)]
  pub first_name: String,
  #[diesel(sql_type = Text)]
  pub last_name: String,
  #[diesel(sql_type = Double)]
  pub total_spent: f64,
}

#[derive(Debug, QueryableByName)]
pub struct GenreListenerRow {
  #[diesel(sql_type = Text)]
  pub email: String,
  #[diesel(sql_type = Text)]
  pub first_name: String,
  #[diesel(sql_type = Text)]
  pub last_name: String,
}

#[derive(Debug, QueryableByName)]
pub struct ArtistTrackCountRow {
  #[diesel(sql_type = Text)]
  pub artist_name: String,
  #[diesel(sql_type = BigInt)]
  pub track_count: i64,
}

#[derive(Debug, QueryableByName)]
pub struct TrackDurationRow {
  #[diesel(sql_type = Text)]
  pub track_name: String,
  #[diesel(sql_type = Integer)]
  pub milliseconds: i32,
}

#[derive(Debug, QueryableByName)]
pub struct ArtistCustomerSpendRow {
  #[diesel(sql_type = Integer)]
  pub customer_id: i32,
  #[diesel(sql_type = Text)]
  pub first_name: String,
  #[diesel(sql_type = Text)]
  pub last_name: String,
  #[diesel(sql_type = Text)]
  pub artist_name: String,
  #[diesel(sql_type = Double)]
  pub amount_spent: f64,
}

#[derive(Debug, QueryableByName)]
pub struct CountryTopGenreRow {
  #[diesel(sql_type = Text)]
  pub country: String,
  #[diesel(sql_type = Text)]
  pub genre_name: String,
  #[diesel(sql_type = BigInt)]
  pub purchase_count: i64,
}

#[derive(Debug, QueryableByName)]
pub struct CountryTopSpenderRow {
  #[diesel(sql_type = Text)]
  pub country: String,
  #[diesel(sql_type = Integer)]
  pub customer_id: i32,
  #[diesel(sql_type = Text)]
  pub first_name: String,
  #[diesel(sql_type = Text)]
  pub last_name: String,
  #[diesel(sql_type = Double)]
  pub total_spent: f64,
}
