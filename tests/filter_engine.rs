// tests/filter_engine.rs
//
// Filter engine over an in-memory catalog; no disk, no UI.
//
use proptest::prelude::*;

use skin_explorer::catalog::{Catalog, Field, Product};
use skin_explorer::config::options::Variant;
use skin_explorer::filter::{self, FilterCriteria, PriceRange};

fn catalog() -> Catalog {
    Catalog::from_products(
        vec![
            Product::new("Gel", "CeraVe", "$250 MXN", "Grasa").with_application("Día").with_cruelty_free("Si"),
            Product::new("Anthelios", "La Roche", "$1,250 MXN", "Mixta").with_application("Día").with_cruelty_free("No"),
            Product::new("Agua de rosas", "Genérica", "consultar", "Seca").with_application("Noche").with_cruelty_free("Si"),
            Product::new("Crema", "CeraVe", "$480", "Seca").with_application("Noche").with_cruelty_free("Si"),
        ],
        Variant::Extended,
    )
}

fn names(c: &Catalog, criteria: &FilterCriteria) -> Vec<String> {
    filter::apply(c, criteria).iter().map(|p| p.name.clone()).collect()
}

#[test]
fn unset_criteria_return_everything_in_order() {
    let c = catalog();
    let view = filter::apply(&c, &FilterCriteria::unbounded());
    assert_eq!(view.row_ix, vec![0, 1, 2, 3]);
    assert_eq!(view.to_owned_products(), c.products().to_vec());
}

#[test]
fn equality_criteria_are_conjunctive_and_stable() {
    let c = catalog();
    assert_eq!(names(&c, &FilterCriteria::unbounded().with_brand("CeraVe")), ["Gel", "Crema"]);
    assert_eq!(
        names(&c, &FilterCriteria::unbounded().with_brand("CeraVe").with_skin_type("Seca")),
        ["Crema"]
    );
    assert_eq!(names(&c, &FilterCriteria::unbounded().with_application("Noche")), ["Agua de rosas", "Crema"]);
    assert_eq!(names(&c, &FilterCriteria::unbounded().with_cruelty_free("No")), ["Anthelios"]);
}

#[test]
fn equality_is_exact() {
    let c = catalog();
    assert!(filter::apply(&c, &FilterCriteria::unbounded().with_brand("cerave")).is_empty());
    assert!(filter::apply(&c, &FilterCriteria::unbounded().with_skin_type("Seca ")).is_empty());
}

#[test]
fn price_bounds_are_inclusive() {
    let c = catalog();
    // "$1,250 MXN" parses to 1250
    let exact = FilterCriteria::unbounded().with_price(1250.0, 1250.0);
    assert_eq!(names(&c, &exact), ["Anthelios"]);

    let above = FilterCriteria::unbounded().with_price(1251.0, 1251.0);
    assert!(filter::apply(&c, &above).is_empty());

    let range = FilterCriteria::unbounded().with_price(250.0, 480.0);
    assert_eq!(names(&c, &range), ["Gel", "Crema"]);
}

#[test]
fn reversed_bounds_are_swapped() {
    assert_eq!(PriceRange::new(500.0, 100.0), PriceRange { min: 100.0, max: 500.0 });
}

#[test]
fn price_without_digits_never_passes_a_bounded_range() {
    let c = catalog();
    for (min, max) in [(0.0, 1e12), (f64::NEG_INFINITY, 0.0), (0.0, f64::INFINITY), (-1e9, 1e9)] {
        let crit = FilterCriteria::unbounded().with_price(min, max);
        assert!(!names(&c, &crit).contains(&"Agua de rosas".to_string()), "[{min}, {max}]");
    }
}

#[test]
fn no_match_is_an_empty_view_not_an_error() {
    let c = catalog();
    let view = filter::apply(&c, &FilterCriteria::unbounded().with_brand("Nadie"));
    assert!(view.is_empty());
    assert_eq!(view.len(), 0);
    assert!(view.get(0).is_none());
}

#[test]
fn choices_are_distinct_in_first_seen_order() {
    let c = catalog();
    assert_eq!(filter::choices(&c, Field::Brand), ["CeraVe", "La Roche", "Genérica"]);
    assert_eq!(filter::choices(&c, Field::SkinType), ["Grasa", "Mixta", "Seca"]);
    assert_eq!(filter::choices(&c, Field::CrueltyFree), ["Si", "No"]);
    // Column absent from every row
    assert!(filter::choices(&c, Field::Texture).is_empty());
}

/* ---------------- properties ---------------- */

fn arb_product() -> impl Strategy<Value = Product> {
    (
        "[A-Z][a-z]{0,6}",
        prop::sample::select(vec!["A", "B", "C"]),
        prop::option::of(0u32..2000),
        prop::sample::select(vec!["Grasa", "Seca", "Mixta"]),
        prop::sample::select(vec!["Día", "Noche"]),
        prop::sample::select(vec!["Si", "No"]),
    )
        .prop_map(|(name, brand, price, skin, app, cf)| {
            let price = price.map(|v| format!("${v} MXN")).unwrap_or_else(|| "n/d".to_string());
            Product::new(name, brand, price, skin).with_application(app).with_cruelty_free(cf)
        })
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::option::of(prop::sample::select(vec!["A", "B", "C"])),
        prop::option::of(prop::sample::select(vec!["Grasa", "Seca", "Mixta"])),
        prop::option::of(prop::sample::select(vec!["Día", "Noche"])),
        prop::option::of(prop::sample::select(vec!["Si", "No"])),
        0.0f64..2000.0,
        0.0f64..2000.0,
    )
        .prop_map(|(brand, skin, app, cf, a, b)| FilterCriteria {
            brand: brand.map(String::from),
            skin_type: skin.map(String::from),
            application: app.map(String::from),
            cruelty_free: cf.map(String::from),
            price: PriceRange::new(a, b),
        })
}

proptest! {
    #[test]
    fn unbounded_filter_is_identity(products in prop::collection::vec(arb_product(), 0..40)) {
        let c = Catalog::from_products(products, Variant::Extended);
        let view = filter::apply(&c, &FilterCriteria::unbounded());
        prop_assert_eq!(view.row_ix, (0..c.len()).collect::<Vec<_>>());
    }

    #[test]
    fn every_result_satisfies_every_set_criterion(
        products in prop::collection::vec(arb_product(), 0..40),
        crit in arb_criteria(),
    ) {
        let c = Catalog::from_products(products, Variant::Extended);
        let view = filter::apply(&c, &crit);

        for p in view.iter() {
            if let Some(b) = &crit.brand { prop_assert_eq!(&p.brand, b); }
            if let Some(s) = &crit.skin_type { prop_assert_eq!(&p.skin_type, s); }
            if let Some(a) = &crit.application { prop_assert_eq!(&p.application, a); }
            if let Some(cf) = &crit.cruelty_free { prop_assert_eq!(p.cruelty_free.as_ref(), Some(cf)); }
            let v = p.price_value();
            prop_assert!(v.is_some());
            prop_assert!(crit.price.contains(v.unwrap()));
        }

        // No false negatives either, and source order is kept
        let expected: Vec<usize> = (0..c.len()).filter(|&i| crit.matches(&c.products()[i])).collect();
        prop_assert_eq!(view.row_ix, expected);
    }
}
