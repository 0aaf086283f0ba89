use crate::domain::report::Report;
use crate::domain::report_kind::ReportKind;
use crate::errors::CoreError;
use crate::ports::ReportCatalog;

/// Despacha reportes por nombre sobre cualquier adaptador del puerto
/// [`ReportCatalog`].
///
/// Cada invocación es independiente y sin estado: ejecutar un reporte no
/// afecta a ningún otro, y el mismo reporte sobre datos sin cambios
/// produce el mismo resultado.
pub struct ReportService<R>
where
  R: ReportCatalog,
{
  catalog: R,
}

impl<R> ReportService<R>
where
  R: ReportCatalog,
{
  pub fn new(catalog: R) -> Self {
    Self { catalog }
  }

  /// Ejecuta un reporte del catálogo y devuelve su resultado tipado.
  pub fn run(&self, kind: ReportKind) -> Result<Report, CoreError> {
    let report = match kind {
      ReportKind::SeniorEmployee => Report::SeniorEmployee(self.catalog.senior_employee()?),
      ReportKind::InvoicesByCountry => Report::InvoicesByCountry(self.catalog.invoices_by_country()?),
      ReportKind::TopInvoiceTotals => Report::TopInvoiceTotals(self.catalog.top_invoice_totals()?),
      ReportKind::BestRevenueCity => Report::BestRevenueCity(self.catalog.best_revenue_city()?),
      ReportKind::BestCustomer => Report::BestCustomer(self.catalog.best_customer()?),
      ReportKind::RockListeners => Report::RockListeners(self.catalog.rock_listeners()?),
      ReportKind::TopRockBands => Report::TopRockBands(self.catalog.top_rock_bands()?),
      ReportKind::AboveAverageTracks => Report::AboveAverageTracks(self.catalog.above_average_tracks()?),
      ReportKind::SpendOnTopArtist => Report::SpendOnTopArtist(self.catalog.spend_on_top_artist()?),
      ReportKind::TopGenrePerCountry => Report::TopGenrePerCountry(self.catalog.top_genre_per_country()?),
      ReportKind::TopSpenderPerCountry => {
        Report::TopSpenderPerCountry(self.catalog.top_spender_per_country()?)
      }
    };

    Ok(report)
  }

  /// Ejecuta un reporte a partir de su nombre estable (`run(query_name)`).
  pub fn run_named(&self, name: &str) -> Result<Report, CoreError> {
    self.run(name.parse()?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::report::*;

  /// Catálogo de mentira que devuelve resultados vacíos en todo.
  struct EmptyCatalog;

  impl ReportCatalog for EmptyCatalog {
    fn senior_employee(&self) -> Result<Option<SeniorEmployee>, CoreError> {
      Ok(None)
    }
    fn invoices_by_country(&self) -> Result<Vec<CountryInvoiceCount>, CoreError> {
      Ok(vec![])
    }
    fn top_invoice_totals(&self) -> Result<Vec<InvoiceTotal>, CoreError> {
      Ok(vec![])
    }
    fn best_revenue_city(&self) -> Result<Option<CityRevenue>, CoreError> {
      Ok(None)
    }
    fn best_customer(&self) -> Result<Option<CustomerSpend>, CoreError> {
      Ok(None)
    }
    fn rock_listeners(&self) -> Result<Vec<GenreListener>, CoreError> {
      Ok(vec![])
    }
    fn top_rock_bands(&self) -> Result<Vec<ArtistTrackCount>, CoreError> {
      Ok(vec![])
    }
    fn above_average_tracks(&self) -> Result<Vec<TrackDuration>, CoreError> {
      Ok(vec![])
    }
    fn spend_on_top_artist(&self) -> Result<Vec<ArtistCustomerSpend>, CoreError> {
      Ok(vec![])
    }
    fn top_genre_per_country(&self) -> Result<Vec<CountryTopGenre>, CoreError> {
      Ok(vec![])
    }
    fn top_spender_per_country(&self) -> Result<Vec<CountryTopSpender>, CoreError> {
      Ok(vec![])
    }
  }

  /// Catálogo que falla en todo, para comprobar la propagación de errores.
  struct BrokenCatalog;

  impl ReportCatalog for BrokenCatalog {
    fn senior_employee(&self) -> Result<Option<SeniorEmployee>, CoreError> {
      Err(CoreError::Repository("disk on fire".into()))
    }
    fn invoices_by_country(&self) -> Result<Vec<CountryInvoiceCount>, CoreError> {
      Err(CoreError::Repository("disk on fire".into()))
    }
    fn top_invoice_totals(&self) -> Result<Vec<InvoiceTotal>, CoreError> {
      Err(CoreError::Repository("disk on fire".into()))
    }
    fn best_revenue_city(&self) -> Result<Option<CityRevenue>, CoreError> {
      Err(CoreError::Repository("disk on fire".into()))
    }
    fn best_customer(&self) -> Result<Option<CustomerSpend>, CoreError> {
      Err(CoreError::Repository("disk on fire".into()))
    }
    fn rock_listeners(&self) -> Result<Vec<GenreListener>, CoreError> {
      Err(CoreError::Repository("disk on fire".into()))
    }
    fn top_rock_bands(&self) -> Result<Vec<ArtistTrackCount>, CoreError> {
      Err(CoreError::Repository("disk on fire".into()))
    }
    fn above_average_tracks(&self) -> Result<Vec<TrackDuration>, CoreError> {
      Err(CoreError::Repository("disk on fire".into()))
    }
    fn spend_on_top_artist(&self) -> Result<Vec<ArtistCustomerSpend>, CoreError> {
      Err(CoreError::Repository("disk on fire".into()))
    }
    fn top_genre_per_country(&self) -> Result<Vec<CountryTopGenre>, CoreError> {
      Err(CoreError::Repository("disk on fire".into()))
    }
    fn top_spender_per_country(&self) -> Result<Vec<CountryTopSpender>, CoreError> {
      Err(CoreError::Repository("disk on fire".into()))
    }
  }

  fn variant_matches(kind: ReportKind, report: &Report) -> bool {
    matches!(
      (kind, report),
      (ReportKind::SeniorEmployee, Report::SeniorEmployee(_))
        | (ReportKind::InvoicesByCountry, Report::InvoicesByCountry(_))
        | (ReportKind::TopInvoiceTotals, Report::TopInvoiceTotals(_))
        | (ReportKind::BestRevenueCity, Report::BestRevenueCity(_))
        | (ReportKind::BestCustomer, Report::BestCustomer(_))
        | (ReportKind::RockListeners, Report::RockListeners(_))
        | (ReportKind::TopRockBands, Report::TopRockBands(_))
        | (ReportKind::AboveAverageTracks, Report::AboveAverageTracks(_))
        | (ReportKind::SpendOnTopArtist, Report::SpendOnTopArtist(_))
        | (ReportKind::TopGenrePerCountry, Report::TopGenrePerCountry(_))
        | (ReportKind::TopSpenderPerCountry, Report::TopSpenderPerCountry(_))
    )
  }

  #[test]
  fn run_dispatches_every_kind_to_its_variant() {
    let service = ReportService::new(EmptyCatalog);

    for kind in ReportKind::ALL {
      let report = service.run(kind).unwrap();
      assert!(variant_matches(kind, &report), "kind {kind} produced {report:?}");
      assert_eq!(report.row_count(), 0);
    }
  }

  #[test]
  fn run_named_accepts_every_catalog_name() {
    let service = ReportService::new(EmptyCatalog);

    for kind in ReportKind::ALL {
      let report = service.run_named(kind.name()).unwrap();
      assert!(variant_matches(kind, &report));
    }
  }

  #[test]
  fn run_named_rejects_unknown_names() {
    let service = ReportService::new(EmptyCatalog);
    let err = service.run_named("weekly_digest").unwrap_err();
    assert!(matches!(err, CoreError::UnknownReport(_)));
  }

  #[test]
  fn storage_failures_surface_unchanged() {
    let service = ReportService::new(BrokenCatalog);

    for kind in ReportKind::ALL {
      let err = service.run(kind).unwrap_err();
      assert!(matches!(err, CoreError::Repository(msg) if msg == "disk on fire"));
    }
  }
}
