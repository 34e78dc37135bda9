//! Browsable product categories.

use serde::Serialize;

/// A category shown in the product list's category selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Category {
    /// API slug.
    pub slug: &'static str,
    /// Display name (pt-BR).
    pub name: &'static str,
}

/// Category selected when the product list first opens.
pub const DEFAULT_CATEGORY: Category = Category {
    slug: "mens-shirts",
    name: "Camisas Masculinas",
};

/// Men's category slugs.
pub const MENS_CATEGORIES: [&str; 3] = ["mens-shirts", "mens-shoes", "mens-watches"];

/// Women's category slugs.
pub const WOMENS_CATEGORIES: [&str; 5] = [
    "womens-bags",
    "womens-dresses",
    "womens-jewellery",
    "womens-shoes",
    "womens-watches",
];

const BROWSABLE: [Category; 6] = [
    DEFAULT_CATEGORY,
    Category {
        slug: "mens-shoes",
        name: "Calçados Masculinos",
    },
    Category {
        slug: "mens-watches",
        name: "Relógios Masculinos",
    },
    Category {
        slug: "womens-dresses",
        name: "Vestidos",
    },
    Category {
        slug: "womens-shoes",
        name: "Calçados Femininos",
    },
    Category {
        slug: "womens-jewellery",
        name: "Jóias",
    },
];

impl Category {
    /// Categories offered in the selector, in display order.
    #[must_use]
    pub const fn browsable() -> &'static [Self] {
        &BROWSABLE
    }

    /// Look up a browsable category by slug.
    #[must_use]
    pub fn find(slug: &str) -> Option<Self> {
        BROWSABLE.iter().copied().find(|category| category.slug == slug)
    }

    /// API path listing this category's products.
    #[must_use]
    pub fn path(self) -> String {
        super::category_path(self.slug)
    }
}

impl Default for Category {
    fn default() -> Self {
        DEFAULT_CATEGORY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first() {
        assert_eq!(Category::browsable().first(), Some(&DEFAULT_CATEGORY));
        assert_eq!(Category::default().slug, "mens-shirts");
    }

    #[test]
    fn test_find() {
        assert_eq!(Category::find("womens-dresses").map(|c| c.name), Some("Vestidos"));
        assert_eq!(Category::find("womens-bags"), None);
    }

    #[test]
    fn test_browsable_slugs_are_grouped() {
        for category in Category::browsable() {
            assert!(
                MENS_CATEGORIES.contains(&category.slug)
                    || WOMENS_CATEGORIES.contains(&category.slug)
            );
        }
    }

    #[test]
    fn test_path() {
        assert_eq!(DEFAULT_CATEGORY.path(), "/products/category/mens-shirts");
    }
}
