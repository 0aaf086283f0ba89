use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::CoreError;

/// Identifica cada reporte del catálogo por su nombre estable.
///
/// Los nombres en snake_case son el contrato público de despacho
/// (`run(query_name)`); parsear un nombre desconocido falla con
/// [`CoreError::UnknownReport`], nunca con un pánico.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportKind {
  /// Empleado con el nivel de jerarquía máximo.
  SeniorEmployee,
  /// Conteo de facturas por país, descendente.
  InvoicesByCountry,
  /// Los 3 totales de factura más altos.
  TopInvoiceTotals,
  /// Ciudad con mayor facturación acumulada.
  BestRevenueCity,
  /// Cliente con mayor gasto acumulado.
  BestCustomer,
  /// Compradores de al menos una pista de Rock, por email.
  RockListeners,
  /// Los 10 artistas con más pistas de Rock.
  TopRockBands,
  /// Pistas más largas que la duración promedio.
  AboveAverageTracks,
  /// Gasto por cliente sobre el artista más vendido.
  SpendOnTopArtist,
  /// Género más comprado por país, empates incluidos.
  TopGenrePerCountry,
  /// Cliente que más gastó por país, empates incluidos.
  TopSpenderPerCountry,
}

impl ReportKind {
  /// Catálogo completo, en el orden de presentación de los reportes.
  pub const ALL: [ReportKind; 11] = [
    ReportKind::SeniorEmployee,
    ReportKind::InvoicesByCountry,
    ReportKind::TopInvoiceTotals,
    ReportKind::BestRevenueCity,
    ReportKind::BestCustomer,
    ReportKind::RockListeners,
    ReportKind::TopRockBands,
    ReportKind::AboveAverageTracks,
    ReportKind::SpendOnTopArtist,
    ReportKind::TopGenrePerCountry,
    ReportKind::TopSpenderPerCountry,
  ];

  /// Nombre estable del reporte.
  pub fn name(&self) -> &'static str {
    match self {
      ReportKind::SeniorEmployee => "senior_employee",
      ReportKind::InvoicesByCountry => "invoices_by_country",
      ReportKind::TopInvoiceTotals => "top_invoice_totals",
      ReportKind::BestRevenueCity => "best_revenue_city",
      ReportKind::BestCustomer => "best_customer",
      ReportKind::RockListeners => "rock_listeners",
      ReportKind::TopRockBands => "top_rock_bands",
      ReportKind::AboveAverageTracks => "above_average_tracks",
      ReportKind::SpendOnTopArtist => "spend_on_top_artist",
      ReportKind::TopGenrePerCountry => "top_genre_per_country",
      ReportKind::TopSpenderPerCountry => "top_spender_per_country",
    }
  }
}

impl FromStr for ReportKind {
  type Err = CoreError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let kind = match s.trim() {
      "senior_employee" => ReportKind::SeniorEmployee,
      "invoices_by_country" => ReportKind::InvoicesByCountry,
      "top_invoice_totals" => ReportKind::TopInvoiceTotals,
      "best_revenue_city" => ReportKind::BestRevenueCity,
      "best_customer" => ReportKind::BestCustomer,
      "rock_listeners" => ReportKind::RockListeners,
      "top_rock_bands" => ReportKind::TopRockBands,
      "above_average_tracks" => ReportKind::AboveAverageTracks,
      "spend_on_top_artist" => ReportKind::SpendOnTopArtist,
      "top_genre_per_country" => ReportKind::TopGenrePerCountry,
      "top_spender_per_country" => ReportKind::TopSpenderPerCountry,
      other => return Err(CoreError::UnknownReport(other.to_string())),
    };

    Ok(kind)
  }
}

impl fmt::Display for ReportKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
