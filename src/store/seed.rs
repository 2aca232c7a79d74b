// src/store/seed.rs

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::auth::{PlanTier, User, UserRole};
use crate::models::catalog::Product;
use crate::models::dashboard::DashboardTip;
use crate::models::onboarding::{IndustryTemplate, ProductSeed};
use crate::models::sales::{PaymentMethod, Sale, SaleItem};

// Valores monetários da semente, em centavos
fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn product(
    sku: &str,
    name: &str,
    category: &str,
    cost_cents: i64,
    price_cents: i64,
    stock: i64,
    min_stock: i64,
    unit: &str,
    supplier: &str,
) -> Product {
    Product {
        id: Uuid::new_v4(),
        sku: sku.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        cost: money(cost_cents),
        price: money(price_cents),
        stock,
        min_stock,
        unit: unit.to_string(),
        supplier: Some(supplier.to_string()),
        last_restock_date: None,
    }
}

fn seed(
    sku: &str,
    name: &str,
    category: &str,
    cost_cents: i64,
    price_cents: i64,
    stock: i64,
    min_stock: i64,
    unit: &str,
    supplier: &str,
) -> ProductSeed {
    ProductSeed {
        sku: sku.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        cost: money(cost_cents),
        price: money(price_cents),
        stock,
        min_stock,
        unit: unit.to_string(),
        supplier: Some(supplier.to_string()),
    }
}

/// Catálogo padrão da aplicação. É para este conjunto que o catálogo
/// volta em todo logout, independente do que foi mexido na sessão.
pub fn default_products() -> Vec<Product> {
    vec![
        product("SP-001", "Chá Matcha Orgânico", "Bebidas", 1250, 2800, 45, 10, "lata", "TeaCo"),
        product("SP-002", "Caneca Cerâmica - Branca", "Cozinha", 320, 1299, 8, 15, "un", "Ceramix"),
        product("SP-003", "Batedor de Bambu", "Cozinha", 500, 1550, 22, 5, "un", "Bamboozled"),
    ]
}

/// Uma venda de ontem para o ledger não começar vazio.
/// O total respeita a regra do checkout: subtotal + 8% de imposto.
pub fn initial_sales(products: &[Product]) -> Vec<Sale> {
    let Some(first) = products.first() else {
        return Vec::new();
    };

    let subtotal = first.price * Decimal::from(2);
    let tax = subtotal * crate::models::sales::tax_rate();

    vec![Sale {
        id: Uuid::new_v4(),
        date: Utc::now() - Duration::days(1),
        total: subtotal + tax,
        items: vec![SaleItem {
            product_id: first.id,
            product_name: first.name.clone(),
            quantity: 2,
            price_at_sale: first.price,
        }],
        payment_method: PaymentMethod::Credit,
    }]
}

/// O usuário de demonstração. O cargo vem da tela de login;
/// o segmento só é carimbado depois do onboarding.
pub fn demo_user(role: UserRole) -> User {
    User {
        id: Uuid::new_v4(),
        name: "Alex Rivera".to_string(),
        email: "alex@stockpilot.co".to_string(),
        role,
        plan: PlanTier::VipNiche,
        industry: None,
        avatar_url: Some("https://picsum.photos/id/64/200/200".to_string()),
        phone: None,
        company_name: Some("Rivera Comércio".to_string()),
    }
}

/// Modelos de segmento oferecidos no onboarding.
pub fn industry_templates() -> Vec<IndustryTemplate> {
    vec![
        IndustryTemplate {
            id: "retail_fashion".to_string(),
            name: "Varejo de Moda".to_string(),
            description: "Perfeito para boutiques de roupas, sapatarias e lojas de acessórios."
                .to_string(),
            categories: vec![
                "Partes de Cima".to_string(),
                "Partes de Baixo".to_string(),
                "Acessórios".to_string(),
                "Sapatos".to_string(),
                "Casacos".to_string(),
            ],
            icon_name: "Shirt".to_string(),
            initial_products: vec![
                seed("F-001", "Camiseta Algodão Gola C", "Partes de Cima", 2500, 8990, 50, 10, "un", "FashionWholesale"),
                seed("F-002", "Calça Jeans Slim Fit", "Partes de Baixo", 6000, 19990, 30, 5, "un", "DenimCo"),
            ],
        },
        IndustryTemplate {
            id: "restaurant".to_string(),
            name: "Restaurante & Café".to_string(),
            description: "Otimizado para ingredientes, perecíveis e itens do cardápio.".to_string(),
            categories: vec![
                "Hortifruti".to_string(),
                "Carnes".to_string(),
                "Laticínios".to_string(),
                "Bebidas".to_string(),
                "Mercearia".to_string(),
            ],
            icon_name: "Coffee".to_string(),
            initial_products: vec![
                // Insumos não têm preço de venda direto (preço zero)
                seed("R-001", "Grãos de Café Espresso (1kg)", "Bebidas", 4500, 0, 10, 3, "pct", "LocalRoast"),
                seed("R-002", "Abacates", "Hortifruti", 350, 0, 40, 10, "un", "FreshFarm"),
            ],
        },
        IndustryTemplate {
            id: "salon".to_string(),
            name: "Salão & Spa".to_string(),
            description: "Rastreie uso interno e produtos de revenda para beleza.".to_string(),
            categories: vec![
                "Cabelo".to_string(),
                "Pele".to_string(),
                "Tinturas".to_string(),
                "Ferramentas".to_string(),
                "Varejo".to_string(),
            ],
            icon_name: "Scissors".to_string(),
            initial_products: vec![
                seed("S-001", "Shampoo (Profissional 1L)", "Cabelo", 6500, 0, 6, 2, "frasco", "BeautySupply"),
                seed("S-002", "Sérum Óleo de Argan", "Varejo", 3000, 8990, 12, 4, "frasco", "LuxeBeauty"),
            ],
        },
        IndustryTemplate {
            id: "auto".to_string(),
            name: "Oficina Mecânica".to_string(),
            description: "Gerencie peças, fluidos e suprimentos de forma eficiente.".to_string(),
            categories: vec![
                "Filtros".to_string(),
                "Fluidos".to_string(),
                "Freios".to_string(),
                "Pneus".to_string(),
                "Ferramentas".to_string(),
            ],
            icon_name: "Wrench".to_string(),
            initial_products: vec![
                seed("A-001", "Óleo Sintético 5W-30", "Fluidos", 2200, 5500, 100, 20, "l", "AutoPartsInc"),
                seed("A-002", "Filtro de Óleo Tipo B", "Filtros", 1200, 3500, 15, 5, "un", "AutoPartsInc"),
            ],
        },
    ]
}

/// Dicas fixas exibidas no painel.
pub fn dashboard_tips() -> Vec<DashboardTip> {
    let entries = [
        ("Gestão", "Analise a Curva ABC: 20% dos seus produtos geram 80% do lucro. Mantenha esses itens sempre em estoque."),
        ("Finanças", "Reduza custos ocultos revisando contratos de fornecedores a cada 6 meses."),
        ("Estoque", "Implemente o método PEPS (Primeiro a Entrar, Primeiro a Sair) para evitar perdas por validade."),
        ("Vendas", "Treine sua equipe para oferecer produtos complementares (cross-sell) no checkout."),
        ("Marketing", "Produtos parados há mais de 90 dias? Crie uma promoção relâmpago para liberar capital de giro."),
    ];

    entries
        .iter()
        .map(|(category, text)| DashboardTip {
            category: category.to_string(),
            text: text.to_string(),
        })
        .collect()
}

/// Converte um produto-semente num produto do catálogo, com id novo.
pub fn product_from_seed(seed: &ProductSeed) -> Product {
    Product {
        id: Uuid::new_v4(),
        sku: seed.sku.clone(),
        name: seed.name.clone(),
        category: seed.category.clone(),
        cost: seed.cost,
        price: seed.price,
        stock: seed.stock,
        min_stock: seed.min_stock,
        unit: seed.unit.clone(),
        supplier: seed.supplier.clone(),
        last_restock_date: None,
    }
}
