use tonada_core::domain::ReportKind;
use tonada_core::services::ReportService;
use tonada_storage::{SqliteReportCatalog, StorageConfig};

fn main() {
  // ajusta la ruta por argumento si no quieres la de la config
  let db_path = std::env::args().nth(1).unwrap_or_else(|| {
    let cfg = StorageConfig::load().expect("failed to load storage config");
    cfg.db_path.to_string_lossy().into_owned()
  });

  println!("Running report catalog against {db_path}");

  let catalog = SqliteReportCatalog::new(&db_path).expect("failed to connect");
  let service = ReportService::new(catalog);

  for kind in ReportKind::ALL {
    let report = service.run(kind).expect("report failed");
    println!("{kind}: {} rows", report.row_count());
  }
}
