// ============================================================================
// VENDOR BROWSE - búsqueda, filtros y orden del listado de vendedores
// ============================================================================
// SOLO preparación de datos, sin estado ni red
// ============================================================================

use std::cmp::Ordering;

use crate::models::Vendor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VendorSort {
    #[default]
    Name,
    /// Más bundles primero
    Bundles,
}

impl VendorSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorSort::Name => "name",
            VendorSort::Bundles => "bundles",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "bundles" => VendorSort::Bundles,
            _ => VendorSort::Name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VendorFilter {
    pub query: String,
    pub vegan_only: bool,
    pub vegetarian_only: bool,
    pub sort: VendorSort,
}

impl VendorFilter {
    fn matches(&self, vendor: &Vendor) -> bool {
        let query = self.query.trim().to_lowercase();
        let text_match = query.is_empty()
            || [&vendor.name, &vendor.city, &vendor.post_code]
                .iter()
                .any(|field| field.to_lowercase().contains(&query));

        // Un bundle vegano también es vegetariano
        let diet_match = (!self.vegan_only || vendor.has_vegan)
            && (!self.vegetarian_only || vendor.has_vegetarian || vendor.has_vegan);

        text_match && diet_match
    }
}

fn by_name(a: &Vendor, b: &Vendor) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

pub fn browse_vendors(vendors: &[Vendor], filter: &VendorFilter) -> Vec<Vendor> {
    let mut visible: Vec<Vendor> = vendors
        .iter()
        .filter(|vendor| filter.matches(vendor))
        .cloned()
        .collect();

    match filter.sort {
        VendorSort::Name => visible.sort_by(by_name),
        VendorSort::Bundles => visible.sort_by(|a, b| {
            b.bundle_count
                .cmp(&a.bundle_count)
                .then_with(|| by_name(a, b))
        }),
    }

    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(id: u32, name: &str, city: &str, bundles: u32, vegan: bool, vegetarian: bool) -> Vendor {
        serde_json::from_value(serde_json::json!({
            "vendor_id": id,
            "name": name,
            "city": city,
            "post_code": "EX4 4DE",
            "bundle_count": bundles,
            "has_vegan": vegan,
            "has_vegetarian": vegetarian,
        }))
        .unwrap()
    }

    fn sample() -> Vec<Vendor> {
        vec![
            vendor(1, "sushi bar", "Exeter", 2, true, true),
            vendor(2, "Bakery", "Bristol", 5, false, true),
            vendor(3, "Butcher", "Exeter", 1, false, false),
        ]
    }

    fn names(vendors: &[Vendor]) -> Vec<&str> {
        vendors.iter().map(|v| v.name.as_str()).collect()
    }

    #[test]
    fn search_is_case_insensitive_over_name_city_and_postcode() {
        let mut filter = VendorFilter {
            query: "EXETER".into(),
            ..Default::default()
        };
        assert_eq!(names(&browse_vendors(&sample(), &filter)), vec!["Butcher", "sushi bar"]);

        filter.query = "bak".into();
        assert_eq!(names(&browse_vendors(&sample(), &filter)), vec!["Bakery"]);

        filter.query = "ex4".into();
        assert_eq!(browse_vendors(&sample(), &filter).len(), 3);
    }

    #[test]
    fn dietary_filters() {
        let vegan = VendorFilter {
            vegan_only: true,
            ..Default::default()
        };
        assert_eq!(names(&browse_vendors(&sample(), &vegan)), vec!["sushi bar"]);

        let vegetarian = VendorFilter {
            vegetarian_only: true,
            ..Default::default()
        };
        assert_eq!(names(&browse_vendors(&sample(), &vegetarian)), vec!["Bakery", "sushi bar"]);
    }

    #[test]
    fn sort_by_bundle_count() {
        let filter = VendorFilter {
            sort: VendorSort::Bundles,
            ..Default::default()
        };
        assert_eq!(
            names(&browse_vendors(&sample(), &filter)),
            vec!["Bakery", "sushi bar", "Butcher"]
        );
        assert_eq!(VendorSort::parse(VendorSort::Bundles.as_str()), VendorSort::Bundles);
    }
}
