//! Display values for the product list and product detail screens.

use core::fmt;

use serde::Serialize;

use crate::catalog::{Product, StockStatus};
use crate::error::PricingError;
use crate::pricing::PriceQuote;
use crate::types::{Currency, ExchangeRate, Locale, ProductId};

/// Gallery images shown on the detail screen.
pub const MAX_EXTRA_IMAGES: usize = 5;

/// Currency to display prices in, with the rate to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    /// Target currency.
    pub currency: Currency,
    /// Rate from the catalog currency.
    pub rate: ExchangeRate,
}

/// How prices and labels are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayOptions {
    /// Locale for number formatting and labels.
    pub locale: Locale,
    /// Display currency; `None` keeps the catalog currency.
    pub conversion: Option<Conversion>,
}

impl DisplayOptions {
    /// Options for `locale` without conversion.
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self {
            locale,
            conversion: None,
        }
    }

    /// Display prices in `currency`.
    #[must_use]
    pub fn with_conversion(mut self, currency: Currency, rate: ExchangeRate) -> Self {
        self.conversion = Some(Conversion { currency, rate });
        self
    }

    /// Quote `product` in the display currency.
    ///
    /// # Errors
    ///
    /// Propagates validation and conversion errors from the pricing module.
    pub fn quote(&self, product: &Product) -> Result<PriceQuote, PricingError> {
        let quote = product.price_quote()?;
        match self.conversion {
            Some(Conversion { currency, rate }) => quote.convert_to(currency, rate),
            None => Ok(quote),
        }
    }
}

/// Text shown when a listing has no products.
#[must_use]
pub const fn empty_listing_label(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Nenhum produto encontrado",
        Locale::EnUs => "No products found",
    }
}

// =============================================================================
// Product card
// =============================================================================

/// One entry of the product list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    /// Product to open on selection.
    pub id: ProductId,
    /// Product name.
    pub title: String,
    /// Brand, when the catalog has one.
    pub brand: Option<String>,
    /// Formatted current price.
    pub price: String,
    /// `-N%` badge, only for discounted products.
    pub discount_badge: Option<String>,
    /// Rating as served by the catalog.
    pub rating: String,
    /// Thumbnail image URL.
    pub thumbnail: String,
}

impl ProductCard {
    /// Build the list entry for `product`.
    ///
    /// # Errors
    ///
    /// Propagates pricing errors for malformed catalog records.
    pub fn build(product: &Product, options: &DisplayOptions) -> Result<Self, PricingError> {
        let quote = options.quote(product)?;
        Ok(Self::from_quote(product, &quote, options.locale))
    }

    fn from_quote(product: &Product, quote: &PriceQuote, locale: Locale) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            brand: product.brand.clone(),
            price: quote.display_price(locale),
            discount_badge: quote.discount().badge(),
            rating: product.rating.normalize().to_string(),
            thumbnail: product.thumbnail.clone(),
        }
    }
}

impl fmt::Display for ProductCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#{} {}", self.id, self.title)?;
        if let Some(brand) = &self.brand {
            writeln!(f, "  {brand}")?;
        }
        match &self.discount_badge {
            Some(badge) => writeln!(f, "  {}  {badge}", self.price)?,
            None => writeln!(f, "  {}", self.price)?,
        }
        write!(f, "  \u{2b50} {}", self.rating)
    }
}

// =============================================================================
// Product detail
// =============================================================================

/// Everything the product detail screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDetail {
    /// Fields shared with the list entry.
    #[serde(flatten)]
    pub card: ProductCard,
    /// Formatted pre-discount price, only for discounted products.
    pub original_price: Option<String>,
    /// Stock availability.
    pub stock: StockStatus,
    /// Stock label, e.g. `38 em estoque`.
    pub stock_label: String,
    /// Long description.
    pub description: String,
    /// Category slug.
    pub category: String,
    /// Up to [`MAX_EXTRA_IMAGES`] gallery URLs.
    pub images: Vec<String>,
    /// Weight, e.g. `4g`.
    pub weight: Option<String>,
    /// Dimensions, e.g. `13.84 x 7.81 x 22.95 cm`.
    pub dimensions: Option<String>,
    #[serde(skip)]
    locale: Locale,
}

impl ProductDetail {
    /// Build the detail view for `product`.
    ///
    /// # Errors
    ///
    /// Propagates pricing errors for malformed catalog records.
    pub fn build(product: &Product, options: &DisplayOptions) -> Result<Self, PricingError> {
        let locale = options.locale;
        let quote = options.quote(product)?;
        let stock = product.stock_status();

        Ok(Self {
            card: ProductCard::from_quote(product, &quote, locale),
            original_price: quote.display_original_price(locale),
            stock,
            stock_label: stock.label(locale),
            description: product.description.clone(),
            category: product.category.clone(),
            images: product.images.iter().take(MAX_EXTRA_IMAGES).cloned().collect(),
            weight: product.weight.map(|grams| format!("{grams}g")),
            dimensions: product.dimensions.map(|d| {
                format!(
                    "{} x {} x {} cm",
                    d.width.normalize(),
                    d.height.normalize(),
                    d.depth.normalize()
                )
            }),
            locale,
        })
    }

    /// Locale the labels were rendered for.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }
}

struct Labels {
    was: &'static str,
    description: &'static str,
    category: &'static str,
    images: &'static str,
    weight: &'static str,
    dimensions: &'static str,
}

const fn labels(locale: Locale) -> Labels {
    match locale {
        Locale::PtBr => Labels {
            was: "De:",
            description: "Descrição",
            category: "Categoria",
            images: "Mais Imagens",
            weight: "Peso",
            dimensions: "Dimensões",
        },
        Locale::EnUs => Labels {
            was: "Was:",
            description: "Description",
            category: "Category",
            images: "More Images",
            weight: "Weight",
            dimensions: "Dimensions",
        },
    }
}

impl fmt::Display for ProductDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = labels(self.locale);

        writeln!(f, "{}", self.card)?;
        if let Some(original) = &self.original_price {
            writeln!(f, "  {} {original}", labels.was)?;
        }
        writeln!(f, "  {}", self.stock_label)?;
        writeln!(f)?;
        writeln!(f, "{}", labels.description)?;
        writeln!(f, "  {}", self.description)?;
        writeln!(f, "{}", labels.category)?;
        writeln!(f, "  {}", self.category)?;
        if !self.images.is_empty() {
            writeln!(f, "{}", labels.images)?;
            for image in &self.images {
                writeln!(f, "  {image}")?;
            }
        }
        write!(f, "SKU: {}", self.card.id)?;
        if let Some(weight) = &self.weight {
            write!(f, "\n{}: {weight}", labels.weight)?;
        }
        if let Some(dimensions) = &self.dimensions {
            write!(f, "\n{}: {dimensions}", labels.dimensions)?;
        }
        Ok(())
    }
}
