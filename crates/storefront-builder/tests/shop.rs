//! Catalog to cart to order summary, as the storefront drives them.

use storefront_builder::{
    Cart, CartError, CartItem, CartStore, CatalogSource, Discount, DiscountError,
    InMemoryCartStore, InMemoryCatalog, OrderSummary, Product, Selection,
};

const PRODUCTS: &str = r#"[
  {
    "id": "tee", "name": "Linen tee", "price": 24.0,
    "attributes": [
      {"name": "size", "values": ["S", "M", "L"]},
      {"name": "color", "values": ["sand", "navy"]}
    ],
    "combinations": [
      {"id": "tee-s-sand", "attributes": {"size": "S", "color": "sand"}, "stock": 2},
      {"id": "tee-m-sand", "attributes": {"size": "M", "color": "sand"}, "stock": 0},
      {"id": "tee-m-navy", "attributes": {"size": "M", "color": "navy"}, "stock": 4, "price": 28.0},
      {"id": "tee-l-navy", "attributes": {"size": "L", "color": "navy"}, "stock": 1}
    ]
  },
  {"id": "mug", "name": "Mug", "price": 12.5, "stock": 10},
  {"id": "poster", "name": "Poster", "price": 9.99, "stock": 0}
]"#;

fn catalog() -> InMemoryCatalog {
    let products: Vec<Product> = serde_json::from_str(PRODUCTS).unwrap();
    InMemoryCatalog::with_products(products)
}

fn select(pairs: &[(&str, &str)]) -> Selection {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn catalog_keeps_order_and_stock() {
    let catalog = catalog();
    let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["tee", "mug", "poster"]);

    assert!(catalog.product("tee").unwrap().in_stock());
    assert!(!catalog.product("poster").unwrap().in_stock());
    assert!(catalog.product("hat").is_none());
}

#[test]
fn attribute_picker_narrows_choices() {
    let catalog = catalog();
    let tee = catalog.product("tee").unwrap();

    // Nothing picked yet: M is available through navy, sand M is sold out.
    assert_eq!(tee.available_values("size", &Selection::new()), vec!["S", "M", "L"]);
    assert_eq!(
        tee.available_values("size", &select(&[("color", "sand")])),
        vec!["S"]
    );
    assert_eq!(
        tee.available_values("color", &select(&[("size", "M")])),
        vec!["navy"]
    );

    assert!(tee.find_combination(&select(&[("size", "M")])).is_none());
    let navy_m = tee
        .find_combination(&select(&[("size", "M"), ("color", "navy")]))
        .unwrap();
    assert_eq!(tee.effective_price(Some(navy_m)), 28.0);
    assert_eq!(tee.available_stock(Some(navy_m)), 4);
}

#[test]
fn checkout_flow() {
    let catalog = catalog();
    let tee = catalog.product("tee").unwrap();
    let mug = catalog.product("mug").unwrap();
    let navy_m = tee
        .find_combination(&select(&[("size", "M"), ("color", "navy")]))
        .unwrap();

    let mut cart = Cart::new("acme");
    cart.add(CartItem::from_product(tee, Some(navy_m), 6)).unwrap();
    cart.add(CartItem::from_product(mug, None, 2)).unwrap();

    // Six navy M tees requested, four in stock.
    assert_eq!(cart.item_count(), 6);
    assert_eq!(cart.subtotal(), 137.0);

    cart.decrement("mug", None).unwrap();
    assert_eq!(cart.subtotal(), 124.5);

    let discounts = vec![
        Discount::percentage("SPRING20", 20.0),
        Discount::fixed("BIGSPEND", 50.0).with_min_subtotal(200.0),
    ];

    let summary = OrderSummary::for_cart(&cart, 4.99);
    assert_eq!(summary.total, 129.49);

    assert_eq!(
        summary.clone().apply_code(&discounts, "bigspend"),
        Err(DiscountError::MinimumNotMet {
            code: "BIGSPEND".into(),
            minimum: 200.0
        })
    );

    let summary = summary.apply_code(&discounts, " spring20 ").unwrap();
    assert_eq!(summary.discount, 24.9);
    assert_eq!(summary.total, 104.59);
    assert_eq!(summary.discount_code.as_deref(), Some("SPRING20"));
}

#[test]
fn sold_out_items_are_rejected() {
    let catalog = catalog();
    let poster = catalog.product("poster").unwrap();
    let mut cart = Cart::new("acme");

    let err = cart.add(CartItem::from_product(poster, None, 1)).unwrap_err();
    assert_eq!(
        err,
        CartError::OutOfStock {
            product_id: "poster".into()
        }
    );
    assert!(cart.is_empty());
}

#[test]
fn carts_persist_per_company() {
    let store = InMemoryCartStore::new();
    let mut acme = store.load("acme").unwrap();
    assert!(acme.is_empty());

    acme.add(CartItem::new("mug", "Mug", 12.5).with_quantity(2)).unwrap();
    store.save(&acme).unwrap();
    store.save(&Cart::new("globex")).unwrap();

    let reloaded = store.load("acme").unwrap();
    assert_eq!(reloaded, acme);
    assert!(store.load("globex").unwrap().is_empty());

    store.clear("acme").unwrap();
    assert!(store.load("acme").unwrap().is_empty());
}

#[test]
fn cart_json_shape() {
    let mut cart = Cart::new("acme");
    cart.add(
        CartItem::new("tee", "Linen tee", 28.0)
            .with_combination("tee-m-navy")
            .with_max_quantity(4),
    )
    .unwrap();

    let json = serde_json::to_value(&cart).unwrap();
    assert_eq!(json["companyId"], "acme");
    assert_eq!(json["items"][0]["combinationId"], "tee-m-navy");
    assert_eq!(json["items"][0]["maxQuantity"], 4);

    let back: Cart = serde_json::from_value(json).unwrap();
    assert_eq!(back, cart);
}
