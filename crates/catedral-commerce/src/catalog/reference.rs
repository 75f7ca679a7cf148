//! The reference product table published by the store.

use crate::catalog::{Category, Product};
use crate::ids::ProductId;
use crate::money::{Currency, Money};

const fn brl(units: i64) -> Money {
    Money::from_units(units, Currency::BRL)
}

macro_rules! image {
    ($file:literal) => {
        concat!("https://lacatedralairsoft.com/img-l/", $file)
    };
}

/// The sixteen products of the reference catalog, in display order.
pub(crate) static PRODUCTS: [Product; 16] = [
    Product {
        id: ProductId::new(1),
        name: "Pistola Silver Black",
        brand: "ROSSI",
        price: brl(1199),
        description: "Pistola GBB estilo 1911, metal full size com carregador",
        image_url: image!("1911_SILVERBLACK_ROSSI.jpg"),
        category: Category::Pistolas,
    },
    Product {
        id: ProductId::new(2),
        name: "Pistola Glock V17",
        brand: "ROSSI",
        price: brl(949),
        description: "Pistola GBB estilo Glock G17, metal full size com carregador",
        image_url: image!("GLOCK_V17_ROSSI.jpg"),
        category: Category::Pistolas,
    },
    Product {
        id: ProductId::new(3),
        name: "Rifle 416L ROSSI",
        brand: "ROSSI",
        price: brl(2549),
        description: "Rifle AEG com corpo em metal e coronha em borracha",
        image_url: image!("NEPTUNE_416L_ROSSI.jpg"),
        category: Category::Rifles,
    },
    Product {
        id: ProductId::new(4),
        name: "Rifle AR15 Sentinel 10",
        brand: "ROSSI",
        price: brl(1649),
        description: "Rifle AEG com corpo em metal e polímero na cor TAN",
        image_url: image!("ROSSI_AR15_SENTINEL_10_TAN.jpg"),
        category: Category::Rifles,
    },
    Product {
        id: ProductId::new(5),
        name: "Sniper M40",
        brand: "ROSSI",
        price: brl(1799),
        description: "Sniper de longo alcance, corpo em polímero e carregador extra.",
        image_url: image!("M40_ROSSI.jpg"),
        category: Category::Snipers,
    },
    Product {
        id: ProductId::new(6),
        name: "Sniper M24",
        brand: "ROSSI",
        price: brl(1799),
        description: "Sniper de longo alcance, corpo em polímero e carregador extra.",
        image_url: image!("M24_STORM_ROSSI.jpg"),
        category: Category::Snipers,
    },
    Product {
        id: ProductId::new(7),
        name: "Red Dot 558 + G33",
        brand: "EOTECH",
        price: brl(950),
        description: "Red Dot 558, retículo vermelho e Magnifier G33 com zoom 3x",
        image_url: image!("red_dot_magnifier_tan.jpg"),
        category: Category::Miras,
    },
    Product {
        id: ProductId::new(8),
        name: "Red Dot T1",
        brand: "VECTOR OPTYCS",
        price: brl(400),
        description: "Red Dot T1, retículo vermelho com ajuste de luminosidade.",
        image_url: image!("red_dot_t1.jpg"),
        category: Category::Miras,
    },
    Product {
        id: ProductId::new(9),
        name: "Máscara Tática Dye FMA F1",
        brand: "DYE",
        price: brl(400),
        description: "Máscara de proteção full face com lente anti-embaçante",
        image_url: image!("fma1_amarela.jpg"),
        category: Category::Protecao,
    },
    Product {
        id: ProductId::new(10),
        name: "Óculos Daisy X7",
        brand: "DAISY",
        price: brl(160),
        description: "Próprio para airsoft, com lente totalmente polarizada.",
        image_url: image!("oculos_daisy_c5.jpg"),
        category: Category::Protecao,
    },
    Product {
        id: ProductId::new(11),
        name: "BB'S 0.25g 5.800Un",
        brand: "LA CATEDRAL",
        price: brl(165),
        description: "Pacote de bolinhas 0.25g com 5.800 unidades.",
        image_url: image!("bb0.25_5800_catedral.png"),
        category: Category::Bolinhas,
    },
    Product {
        id: ProductId::new(12),
        name: "BB'S 0.28g 5.800Un",
        brand: "LA CATEDRAL",
        price: brl(195),
        description: "Pacote de bolinhas 0.28g com 5.800 unidades.",
        image_url: image!("bb0.28_5800_catedral.png"),
        category: Category::Bolinhas,
    },
    Product {
        id: ProductId::new(13),
        name: "AnPeq 15 Remote EX276",
        brand: "ELEMENT",
        price: brl(499),
        description: "Anpeq 15 EX276 funcional com lanterna de led, laser infravermelho e acionador remoto",
        image_url: image!("anpeq_preto.jpg"),
        category: Category::Acessorios,
    },
    Product {
        id: ProductId::new(14),
        name: "Tracer Spitifire",
        brand: "SPITIFIRE",
        price: brl(195),
        description: "Tracer Airsoft Lighter S ultra compact recarregável. Mod-Spitifire.",
        image_url: image!("tracer_spitfire.jpg"),
        category: Category::Acessorios,
    },
    Product {
        id: ProductId::new(15),
        name: "Gás Red",
        brand: "TAG",
        price: brl(110),
        description: "O cilindro Green Gás Red Airsoft Taikoon NTK 270g de alta performance foi formulado para entregar potência extra para armas e pistolas de airsoft GBB gás.",
        image_url: image!("red_gas.jpg"),
        category: Category::Suprimentos,
    },
    Product {
        id: ProductId::new(16),
        name: "Gás Taikoon",
        brand: "TAG",
        price: brl(95),
        description: "Possui uma fórmula especial, para maximizar a performance e proteger os componentes internos de seu equipamento, não necessitando de bico adaptador.",
        image_url: image!("gas-tag.jpg"),
        category: Category::Suprimentos,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const IMAGE_BASE: &str = "https://lacatedralairsoft.com/img-l/";

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = PRODUCTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PRODUCTS.len());
    }

    #[test]
    fn test_prices_are_positive() {
        assert!(PRODUCTS.iter().all(|p| p.price.is_positive()));
    }

    #[test]
    fn test_images_are_hosted_by_the_store() {
        assert!(PRODUCTS.iter().all(|p| p.image_url.starts_with(IMAGE_BASE)));
    }

    #[test]
    fn test_every_category_is_stocked() {
        for category in Category::ALL {
            assert_eq!(PRODUCTS.iter().filter(|p| p.is_in(category)).count(), 2);
        }
    }
}
