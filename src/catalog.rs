// src/catalog.rs
//
// Typed catalog built on top of a raw DataSet.
//
// Column lookup goes through `Field::aliases()`, so both the Spanish
// headers of the original spreadsheet ("nombre del producto", "tipo de
// piel", ...) and English ones ("product name", "skin type", ...) work.
// Headers are already trimmed + lowercased by the store.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::config::options::{AppOptions, Variant};
use crate::error::CatalogError;
use crate::price::{max_price, parse_price};
use crate::store::{self, DataSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Brand,
    Category,
    Price,
    SkinType,
    Application,
    LongTermEffect,
    CrueltyFree,
    Link,
    Volume,
    Texture,
    Vegan,
    Image,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::Name, Field::Brand, Field::Category, Field::Price, Field::SkinType,
        Field::Application, Field::LongTermEffect, Field::CrueltyFree, Field::Link,
        Field::Volume, Field::Texture, Field::Vegan, Field::Image,
    ];

    /// Accepted (normalized) header names, preferred first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Name => &["nombre del producto", "nombre", "product name", "name"],
            Field::Brand => &["marca", "brand"],
            Field::Category => &["producto", "categoría", "categoria", "product", "category"],
            Field::Price => &["precio", "price"],
            Field::SkinType => &["tipo de piel", "skin type", "skin-type", "skin_type"],
            Field::Application => &["aplicación", "aplicacion", "application", "time of use", "time-of-use"],
            Field::LongTermEffect => &["efecto a largo plazo", "long-term effect", "long term effect"],
            Field::CrueltyFree => &["libre de crueldad", "cruelty free", "cruelty-free"],
            Field::Link => &["enlaces", "enlace", "link", "purchase link"],
            Field::Volume => &["contenido", "volumen", "content", "volume"],
            Field::Texture => &["textura", "texture"],
            Field::Vegan => &["vegano", "vegan"],
            Field::Image => &["imagen", "image", "image filename"],
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nombre del producto",
            Field::Brand => "Marca",
            Field::Category => "Producto",
            Field::Price => "Precio",
            Field::SkinType => "Tipo de piel",
            Field::Application => "Aplicación",
            Field::LongTermEffect => "Efecto a largo plazo",
            Field::CrueltyFree => "Libre de crueldad",
            Field::Link => "Enlace",
            Field::Volume => "Contenido",
            Field::Texture => "Textura",
            Field::Vegan => "Vegano",
            Field::Image => "Imagen",
        }
    }

    /// Whether a catalog without this column is unusable for `variant`.
    pub fn is_required(self, variant: Variant) -> bool {
        match self {
            Field::Name | Field::Brand | Field::Category | Field::Price | Field::SkinType
            | Field::Application | Field::LongTermEffect | Field::Link => true,
            Field::CrueltyFree => variant.exposes_cruelty_free(),
            Field::Volume | Field::Texture | Field::Vegan | Field::Image => false,
        }
    }

    /// Canonical name used in `MissingColumn` errors.
    pub fn key(self) -> &'static str {
        self.aliases()[0]
    }
}

/// One catalog row. Cells are kept exactly as read.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub name: String,
    pub brand: String,
    pub category: String,
    /// Raw price text, e.g. "$25.00" or "25 MXN".
    pub price: String,
    pub skin_type: String,
    pub application: String,
    pub long_term_effect: String,
    pub link: String,
    pub cruelty_free: Option<String>,
    pub volume: Option<String>,
    pub texture: Option<String>,
    pub vegan: Option<String>,
    pub image: Option<String>,
    price_value: Option<f64>,
}

impl Product {
    /// Minimal constructor; optional fields start empty.
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        price: impl Into<String>,
        skin_type: impl Into<String>,
    ) -> Self {
        let price = price.into();
        Self {
            name: name.into(),
            brand: brand.into(),
            category: s!(),
            price_value: parse_price(&price),
            price,
            skin_type: skin_type.into(),
            application: s!(),
            long_term_effect: s!(),
            link: s!(),
            cruelty_free: None,
            volume: None,
            texture: None,
            vegan: None,
            image: None,
        }
    }

    pub fn with_application(mut self, v: impl Into<String>) -> Self {
        self.application = v.into();
        self
    }

    pub fn with_cruelty_free(mut self, v: impl Into<String>) -> Self {
        self.cruelty_free = Some(v.into());
        self
    }

    pub fn with_long_term_effect(mut self, v: impl Into<String>) -> Self {
        self.long_term_effect = v.into();
        self
    }

    /// Normalized price; `None` when the raw text has no digits.
    pub fn price_value(&self) -> Option<f64> { self.price_value }

    /// Cell text for a field; empty optional cells read as `None`.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Brand => Some(&self.brand),
            Field::Category => Some(&self.category),
            Field::Price => Some(&self.price),
            Field::SkinType => Some(&self.skin_type),
            Field::Application => Some(&self.application),
            Field::LongTermEffect => Some(&self.long_term_effect),
            Field::Link => Some(&self.link),
            Field::CrueltyFree => self.cruelty_free.as_deref(),
            Field::Volume => self.volume.as_deref(),
            Field::Texture => self.texture.as_deref(),
            Field::Vegan => self.vegan.as_deref(),
            Field::Image => self.image.as_deref(),
        }
    }
}

/// Header → column index for every field present in a DataSet.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    columns: HashMap<Field, usize>,
}

impl Schema {
    pub fn resolve(ds: &DataSet, variant: Variant) -> Result<Self, CatalogError> {
        let mut columns = HashMap::new();
        for field in Field::ALL {
            match field.aliases().iter().find_map(|a| ds.column(a)) {
                Some(ix) => { columns.insert(field, ix); }
                None if field.is_required(variant) => {
                    return Err(CatalogError::MissingColumn { column: field.key() });
                }
                None => {}
            }
        }
        Ok(Self { columns })
    }

    pub fn column(&self, field: Field) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    fn cell(&self, row: &[String], field: Field) -> String {
        self.column(field).and_then(|ix| row.get(ix)).cloned().unwrap_or_default()
    }

    fn optional(&self, row: &[String], field: Field) -> Option<String> {
        self.column(field)
            .and_then(|ix| row.get(ix))
            .filter(|v| !v.trim().is_empty())
            .cloned()
    }

    fn product(&self, row: &[String]) -> Product {
        let price = self.cell(row, Field::Price);
        Product {
            name: self.cell(row, Field::Name),
            brand: self.cell(row, Field::Brand),
            category: self.cell(row, Field::Category),
            price_value: parse_price(&price),
            price,
            skin_type: self.cell(row, Field::SkinType),
            application: self.cell(row, Field::Application),
            long_term_effect: self.cell(row, Field::LongTermEffect),
            link: self.cell(row, Field::Link),
            cruelty_free: self.optional(row, Field::CrueltyFree),
            volume: self.optional(row, Field::Volume),
            texture: self.optional(row, Field::Texture),
            vegan: self.optional(row, Field::Vegan),
            image: self.optional(row, Field::Image),
        }
    }
}

/// The in-memory product table for one session.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    variant: Variant,
}

impl Catalog {
    /// Read, normalize and type the catalog named in `options`.
    pub fn load(options: &AppOptions) -> Result<Self, CatalogError> {
        let ds = store::load_dataset(&options.catalog, options.delim())?;
        let catalog = Self::from_dataset(&ds, options.variant)?;
        info!(
            path = %options.catalog.display(),
            products = catalog.len(),
            variant = ?options.variant,
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_dataset(ds: &DataSet, variant: Variant) -> Result<Self, CatalogError> {
        let schema = Schema::resolve(ds, variant)?;
        let products: Vec<Product> = ds.rows.iter().map(|r| schema.product(r)).collect();
        let catalog = Self { products, variant };

        let unpriced = catalog.unpriced_count();
        if unpriced > 0 {
            warn!(rows = unpriced, "price without digits; rows excluded from price filtering");
        }
        let dups = catalog.duplicate_names();
        if !dups.is_empty() {
            warn!(names = ?dups, "duplicate product names; selection treats them as one product");
        }
        Ok(catalog)
    }

    pub fn from_products(products: Vec<Product>, variant: Variant) -> Self {
        Self { products, variant }
    }

    pub fn variant(&self) -> Variant { self.variant }
    pub fn products(&self) -> &[Product] { &self.products }
    pub fn get(&self, ix: usize) -> Option<&Product> { self.products.get(ix) }
    pub fn len(&self) -> usize { self.products.len() }
    pub fn is_empty(&self) -> bool { self.products.is_empty() }

    /// Upper bound for the price slider.
    pub fn max_price(&self) -> Option<f64> {
        max_price(self.products.iter().map(Product::price_value))
    }

    /// Rows whose price text has no digits.
    pub fn unpriced_count(&self) -> usize {
        self.products.iter().filter(|p| p.price_value().is_none()).count()
    }

    /// Names occurring more than once, in first-seen order.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut order = Vec::new();
        for p in &self.products {
            let n = seen.entry(p.name.as_str()).or_insert(0);
            *n += 1;
            if *n == 2 { order.push(p.name.as_str()); }
        }
        order
    }
}
