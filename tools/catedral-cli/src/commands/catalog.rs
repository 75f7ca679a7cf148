//! Catalog listing commands.

use anyhow::Result;
use catedral_commerce::catalog::{Category, CategoryFilter, Product};
use catedral_commerce::ProductId;
use serde::Serialize;

use super::{CatalogArgs, ShowArgs};
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();

    if args.categories {
        let options: Vec<CategoryRow> = CategoryFilter::options()
            .map(|filter| CategoryRow {
                label: filter.label(),
                products: catalog.filter_by_category(filter).len(),
            })
            .collect();

        if ctx.output.is_json() {
            ctx.output.json(&options);
            return Ok(());
        }

        ctx.output.header("Categorias");
        for row in &options {
            ctx.output
                .table_row(&[row.label, &row.products.to_string()], &[14, 4]);
        }
        return Ok(());
    }

    let filter = parse_category(&args.category)?;
    let products = catalog.filter_by_category(filter);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("LOJA · {}", filter));

    if products.is_empty() {
        ctx.output.info("Nenhum produto nesta categoria.");
        return Ok(());
    }

    let widths = [4, 30, 14, 12];
    ctx.output.table_row(&["ID", "PRODUTO", "CATEGORIA", "PREÇO"], &widths);
    ctx.output.rule();
    for product in &products {
        ctx.output.table_row(
            &[
                &product.id.to_string(),
                product.name,
                product.category.label(),
                &product.price_label(),
            ],
            &widths,
        );
    }

    ctx.output.info(&format!("{} produto(s)", products.len()));
    Ok(())
}

/// Show one product in detail.
pub fn show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();
    let product = catalog.require(ProductId::new(args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    print_product(product, ctx);
    Ok(())
}

/// Print the detail view of a product.
pub fn print_product(product: &Product, ctx: &Context) {
    ctx.output.header(product.name);
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv("marca", product.brand);
    ctx.output.kv("categoria", product.category.label());
    ctx.output.kv("preço", &product.price_label());
    ctx.output.kv("imagem", product.image_url);
    ctx.output.text("");
    ctx.output.text(product.description);
}

/// Parse a `--category` value: a display label, "Todos"/"all", or a slug.
fn parse_category(arg: &str) -> Result<CategoryFilter> {
    match arg.parse::<CategoryFilter>() {
        Ok(filter) => Ok(filter),
        Err(err) => Category::from_slug(arg)
            .map(CategoryFilter::Only)
            .ok_or_else(|| err.into()),
    }
}

#[derive(Serialize)]
struct CategoryRow {
    label: &'static str,
    products: usize,
}
