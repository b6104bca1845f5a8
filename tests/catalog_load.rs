// tests/catalog_load.rs
//
// Loader: header normalization, column resolution, fatal errors.
//
use std::fs;
use std::path::{Path, PathBuf};

use skin_explorer::catalog::{Catalog, Field};
use skin_explorer::config::options::{AppOptions, Variant};
use skin_explorer::csv::Delim;
use skin_explorer::error::CatalogError;
use skin_explorer::store::{dataset_from_text, load_dataset, normalize_header};

const CATALOG: &str = "\
 Marca ,Producto,  Nombre del producto,PRECIO,Tipo de piel,Aplicación ,Efecto a largo plazo,Libre de crueldad,Enlaces,Imagen
CeraVe,Limpiador,Gel Espumoso,$250 MXN,Grasa,Día y noche,Menos brillo,Si,https://example.com/gel,gel.png
La Roche,Protector,Anthelios,\"$1,250 MXN\",Mixta,Día,Menos manchas,No,https://example.com/anthelios,
Genérica,Tónico,Agua de rosas,consultar,Seca,Noche,Hidratación,Si,https://example.com/rosas,
";

fn write_catalog(dir: &Path, name: &str, text: &str) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, text).unwrap();
    p
}

#[test]
fn headers_are_trimmed_and_lowercased() {
    assert_eq!(normalize_header("  Marca "), "marca");
    assert_eq!(normalize_header("Aplicación "), "aplicación");
    assert_eq!(normalize_header("\tTIPO DE PIEL"), "tipo de piel");

    let ds = dataset_from_text(CATALOG, Delim::Csv, Path::new("mem")).unwrap();
    assert_eq!(&ds.headers[..3], &["marca", "producto", "nombre del producto"]);
    assert_eq!(ds.column("precio"), Some(3));
    assert_eq!(ds.row_count(), 3);
}

#[test]
fn values_are_left_as_is() {
    let ds = dataset_from_text(CATALOG, Delim::Csv, Path::new("mem")).unwrap();
    assert_eq!(ds.rows[1][3], "$1,250 MXN");
    assert_eq!(ds.rows[0][0], "CeraVe");
}

#[test]
fn load_from_disk_builds_typed_products() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), "basedatos.csv", CATALOG);

    let catalog = Catalog::load(&AppOptions::default().with_catalog(&path)).unwrap();
    assert_eq!(catalog.len(), 3);

    let gel = &catalog.products()[0];
    assert_eq!(gel.name, "Gel Espumoso");
    assert_eq!(gel.brand, "CeraVe");
    assert_eq!(gel.category, "Limpiador");
    assert_eq!(gel.price, "$250 MXN");
    assert_eq!(gel.price_value(), Some(250.0));
    assert_eq!(gel.application, "Día y noche");
    assert_eq!(gel.cruelty_free.as_deref(), Some("Si"));
    assert_eq!(gel.image.as_deref(), Some("gel.png"));

    // Empty optional cell → None
    assert_eq!(catalog.products()[1].image, None);
    assert_eq!(catalog.products()[1].price_value(), Some(1250.0));
}

#[test]
fn unparsable_price_does_not_abort_loading() {
    let ds = dataset_from_text(CATALOG, Delim::Csv, Path::new("mem")).unwrap();
    let catalog = Catalog::from_dataset(&ds, Variant::Extended).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.unpriced_count(), 1);
    assert_eq!(catalog.max_price(), Some(1250.0));
}

#[test]
fn english_headers_and_tsv_are_accepted() {
    let text = "Product Name\tBrand\tCategory\tPrice\tSkin Type\tApplication\tLong-term effect\tCruelty free\tLink\n\
                Serum C\tAcme\tSerum\t$30.50\tAll\tAM\tGlow\tYes\thttps://example.com/c\n";
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(dir.path(), "catalog.tsv", text);

    let opts = AppOptions::default().with_catalog(&path);
    assert_eq!(opts.delim(), Delim::Tsv);

    let catalog = Catalog::load(&opts).unwrap();
    let p = &catalog.products()[0];
    assert_eq!(p.name, "Serum C");
    assert_eq!(p.price_value(), Some(30.5));
    assert_eq!(p.get(Field::CrueltyFree), Some("Yes"));
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_dataset(&dir.path().join("nope.csv"), Delim::Csv).unwrap_err();
    assert!(matches!(err, CatalogError::Load { .. }), "{err:?}");
}

#[test]
fn missing_required_column_is_fatal() {
    let text = "marca,producto,nombre del producto,tipo de piel,aplicación,efecto a largo plazo,libre de crueldad,enlaces\n\
                A,B,C,D,E,F,Si,G\n";
    let ds = dataset_from_text(text, Delim::Csv, Path::new("mem")).unwrap();
    let err = Catalog::from_dataset(&ds, Variant::Extended).unwrap_err();
    match err {
        CatalogError::MissingColumn { column } => assert_eq!(column, "precio"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn cruelty_free_column_is_only_required_by_the_extended_variant() {
    let text = "marca,producto,nombre del producto,precio,tipo de piel,aplicación,efecto a largo plazo,enlaces\n\
                A,B,C,$5,D,E,F,G\n";
    let ds = dataset_from_text(text, Delim::Csv, Path::new("mem")).unwrap();

    assert!(Catalog::from_dataset(&ds, Variant::Basic).is_ok());
    let err = Catalog::from_dataset(&ds, Variant::Extended).unwrap_err();
    assert!(matches!(err, CatalogError::MissingColumn { column: "libre de crueldad" }));
}

#[test]
fn malformed_sources_are_rejected() {
    let origin = Path::new("mem");

    let empty = dataset_from_text("", Delim::Csv, origin).unwrap_err();
    assert!(matches!(empty, CatalogError::Malformed { .. }));

    let too_wide = dataset_from_text("a,b\n1,2,3\n", Delim::Csv, origin).unwrap_err();
    assert!(too_wide.to_string().contains("3 fields"), "{too_wide}");

    let open_quote = dataset_from_text("a,b\n\"1,2\n", Delim::Csv, origin).unwrap_err();
    assert!(matches!(open_quote, CatalogError::Malformed { .. }));
}

#[test]
fn short_rows_are_padded() {
    let ds = dataset_from_text("a,b,c\n1\n", Delim::Csv, Path::new("mem")).unwrap();
    assert_eq!(ds.rows[0], vec!["1".to_string(), String::new(), String::new()]);
}

#[test]
fn duplicate_names_are_kept_and_reported() {
    let text = "marca,producto,nombre del producto,precio,tipo de piel,aplicación,efecto a largo plazo,libre de crueldad,enlaces\n\
                X,P,Crema,$10,Seca,Día,F,Si,l\n\
                Y,P,Crema,$20,Grasa,Noche,F,No,l\n\
                Z,P,Otra,$30,Grasa,Noche,F,No,l\n";
    let ds = dataset_from_text(text, Delim::Csv, Path::new("mem")).unwrap();
    let catalog = Catalog::from_dataset(&ds, Variant::Extended).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.duplicate_names(), vec!["Crema"]);
}
