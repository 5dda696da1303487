use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;

/// Row of the `products` table.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            self.name,
            self.description,
            self.price,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_map_row_into_domain_product() {
        let entity = ProductEntity {
            id: 9,
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: BigDecimal::from_str("9.99").unwrap(),
        };

        let product = entity.into_domain();

        assert_eq!(product.id, ProductId::new(9));
        assert_eq!(product.name, "Widget");
        assert_eq!(product.description, "A widget");
        assert_eq!(product.price, BigDecimal::from_str("9.99").unwrap());
    }
}
