//! Builds a small sample catalog and prints it.

use std::sync::Arc;

use anyhow::Context;

use vitrina_categories::{Category, CategoryRegistry};
use vitrina_products::{Priced, Product, Quantified};

fn main() -> anyhow::Result<()> {
    vitrina_observability::init();

    let registry = CategoryRegistry::global();

    let phones = vec![
        Arc::new(
            Product::smartphone(
                "Samsung Galaxy S23 Ultra",
                "256GB, Серый цвет, 200MP камера",
                180000.0,
                5,
                95.5,
                "S23 Ultra",
                256,
                "Серый",
            )
            .context("building Samsung Galaxy S23 Ultra")?,
        ),
        Arc::new(
            Product::smartphone("Iphone 15", "512GB, Gray space", 210000.0, 8, 98.2, "15", 512, "Gray space")
                .context("building Iphone 15")?,
        ),
        Arc::new(
            Product::smartphone("Xiaomi Redmi Note 11", "1024GB, Синий", 31000.0, 14, 90.3, "Note 11", 1024, "Синий")
                .context("building Xiaomi Redmi Note 11")?,
        ),
    ];

    let smartphones = Category::new(
        registry,
        "Смартфоны",
        "Смартфоны, как средство не только коммуникации, но и получения дополнительных функций для удобства жизни",
        phones,
    );
    print_category(&smartphones);

    let tv = Arc::new(
        Product::new("55\" QLED 4K", "Фоновая подсветка", 123000.0, 7).context("building 55\" QLED 4K")?,
    );
    let televisions = Category::new(
        registry,
        "Телевизоры",
        "Современный телевизор, который позволяет наслаждаться просмотром, станет вашим другом и помощником",
        vec![tv],
    );
    print_category(&televisions);

    let first = &smartphones.products()[0];
    let second = &smartphones.products()[1];
    let total = first.combine(second).context("combining smartphones")?;
    println!("Сумма {} и {}: {total}", first.name(), second.name());
    println!();

    println!("Общее количество категорий: {}", registry.category_count());
    println!("Общее количество товаров: {}", registry.product_count());

    tracing::info!(
        categories = registry.category_count(),
        products = registry.product_count(),
        "demo catalog built"
    );

    Ok(())
}

fn print_category(category: &Category<'_>) {
    println!("Название категории: {}", category.name());
    println!("Описание категории: {}", category.description());
    println!("Количество продуктов в категории: {}", category.len());
    println!("{category}");
    println!();

    for product in category.products() {
        println!("Название: {}", product.name());
        println!("Описание: {}", product.description());
        println!("Цена: {}", product.price());
        println!("Количество: {}", product.quantity());
        println!("{product}");
        println!();
    }
}
