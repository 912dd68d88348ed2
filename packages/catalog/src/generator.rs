// ABOUTME: Catalogue generation from the fixed product template list
// ABOUTME: Randomness lives here only; the generated catalogue is immutable

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::stores::StoreKey;
use crate::types::{HistoryPoint, PriceEntry, Product, StorePrices};

/// One seed entry: name, category, brand, size, unit, base price.
struct Template(
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    f64,
);

#[rustfmt::skip]
const TEMPLATES: &[Template] = &[
    // Fruit & Veg
    Template("Royal Gala Apples", "Fruit & Veg", "Fresh Produce", "1kg", "kg", 4.50),
    Template("Cavendish Bananas", "Fruit & Veg", "Fresh Produce", "1kg", "kg", 3.20),
    Template("Strawberries Punnet", "Fruit & Veg", "Fresh Produce", "250g", "250g", 4.00),
    Template("Hass Avocados", "Fruit & Veg", "Fresh Produce", "Each", "each", 2.50),
    Template("Broccoli", "Fruit & Veg", "Fresh Produce", "Each", "each", 3.00),
    Template("Carrots", "Fruit & Veg", "Fresh Produce", "1kg", "kg", 2.00),
    Template("Baby Spinach", "Fruit & Veg", "Fresh Produce", "120g", "120g", 3.50),
    Template("Roma Tomatoes", "Fruit & Veg", "Fresh Produce", "500g", "500g", 4.00),
    Template("Sweet Potato", "Fruit & Veg", "Fresh Produce", "1kg", "kg", 3.50),
    Template("Red Onions", "Fruit & Veg", "Fresh Produce", "1kg", "kg", 2.50),
    Template("Cucumbers", "Fruit & Veg", "Fresh Produce", "Each", "each", 1.50),
    Template("Grapes Red Seedless", "Fruit & Veg", "Fresh Produce", "500g", "500g", 5.00),
    Template("Oranges Navel", "Fruit & Veg", "Fresh Produce", "1kg", "kg", 4.00),
    Template("Lemons", "Fruit & Veg", "Fresh Produce", "500g", "500g", 3.50),
    Template("Blueberries", "Fruit & Veg", "Fresh Produce", "125g", "125g", 5.00),
    Template("Watermelon", "Fruit & Veg", "Fresh Produce", "Quarter", "quarter", 4.50),
    Template("Pineapple", "Fruit & Veg", "Fresh Produce", "Each", "each", 4.00),
    Template("Mango", "Fruit & Veg", "Fresh Produce", "Each", "each", 3.00),
    Template("Capsicum Red", "Fruit & Veg", "Fresh Produce", "Each", "each", 2.00),
    Template("Mushrooms Cup", "Fruit & Veg", "Fresh Produce", "200g", "200g", 3.00),
    Template("Lettuce Iceberg", "Fruit & Veg", "Fresh Produce", "Each", "each", 2.50),
    Template("Zucchini", "Fruit & Veg", "Fresh Produce", "Each", "each", 1.80),
    Template("Garlic", "Fruit & Veg", "Fresh Produce", "3 Pack", "3pk", 3.00),
    Template("Ginger", "Fruit & Veg", "Fresh Produce", "100g", "100g", 2.00),
    Template("Potatoes", "Fruit & Veg", "Fresh Produce", "2kg", "2kg", 4.00),
    // Dairy & Eggs
    Template("Full Cream Milk", "Dairy & Eggs", "Devondale", "2L", "2L", 3.50),
    Template("A2 Full Cream Milk", "Dairy & Eggs", "A2", "2L", "2L", 5.80),
    Template("Lite Milk", "Dairy & Eggs", "Dairy Farmers", "2L", "2L", 3.30),
    Template("Free Range Eggs", "Dairy & Eggs", "Sunny Queen", "12 Pack", "12pk", 6.00),
    Template("Cage Free Eggs", "Dairy & Eggs", "Farm Pride", "12 Pack", "12pk", 5.00),
    Template("Organic Eggs", "Dairy & Eggs", "Organic Valley", "6 Pack", "6pk", 7.50),
    Template("Greek Yoghurt", "Dairy & Eggs", "Chobani", "500g", "500g", 5.50),
    Template("Natural Yoghurt", "Dairy & Eggs", "Jalna", "1kg", "kg", 6.00),
    Template("Tasty Cheese Block", "Dairy & Eggs", "Bega", "500g", "500g", 7.00),
    Template("Mozzarella Cheese", "Dairy & Eggs", "Perfect Italiano", "450g", "450g", 8.00),
    Template("Parmesan Cheese", "Dairy & Eggs", "Perfect Italiano", "250g", "250g", 9.00),
    Template("Butter Salted", "Dairy & Eggs", "Western Star", "500g", "500g", 6.50),
    Template("Thickened Cream", "Dairy & Eggs", "Bulla", "300ml", "300ml", 3.00),
    Template("Sour Cream", "Dairy & Eggs", "Dairy Farmers", "300g", "300g", 3.50),
    Template("Cream Cheese", "Dairy & Eggs", "Philadelphia", "250g", "250g", 5.00),
    Template("Almond Milk", "Dairy & Eggs", "Vitasoy", "1L", "1L", 3.50),
    Template("Oat Milk", "Dairy & Eggs", "Oatly", "1L", "1L", 5.00),
    Template("Soy Milk", "Dairy & Eggs", "Vitasoy", "1L", "1L", 3.00),
    Template("Coconut Milk", "Dairy & Eggs", "Ayam", "400ml", "400ml", 2.00),
    Template("Cottage Cheese", "Dairy & Eggs", "Dairy Farmers", "250g", "250g", 4.00),
    // Meat & Seafood
    Template("Chicken Breast", "Meat & Seafood", "Lilydale", "500g", "500g", 9.00),
    Template("Chicken Thigh", "Meat & Seafood", "Lilydale", "500g", "500g", 7.50),
    Template("Chicken Wings", "Meat & Seafood", "Ingham", "1kg", "kg", 8.00),
    Template("Beef Mince", "Meat & Seafood", "Premium", "500g", "500g", 7.00),
    Template("Beef Steak Scotch Fillet", "Meat & Seafood", "Premium", "400g", "400g", 18.00),
    Template("Beef Rump Steak", "Meat & Seafood", "Premium", "500g", "500g", 12.00),
    Template("Pork Sausages", "Meat & Seafood", "Don", "500g", "500g", 6.50),
    Template("Pork Chops", "Meat & Seafood", "Premium", "500g", "500g", 10.00),
    Template("Bacon Rashers", "Meat & Seafood", "Don", "250g", "250g", 6.00),
    Template("Ham Leg Sliced", "Meat & Seafood", "Don", "200g", "200g", 5.00),
    Template("Atlantic Salmon", "Meat & Seafood", "Tassal", "300g", "300g", 12.00),
    Template("Barramundi Fillets", "Meat & Seafood", "Ocean Blue", "400g", "400g", 15.00),
    Template("Prawns Raw", "Meat & Seafood", "Ocean Blue", "500g", "500g", 18.00),
    Template("Lamb Cutlets", "Meat & Seafood", "Premium", "400g", "400g", 15.00),
    Template("Lamb Mince", "Meat & Seafood", "Premium", "500g", "500g", 10.00),
    Template("Whole Chicken", "Meat & Seafood", "Lilydale", "1.5kg", "1.5kg", 12.00),
    Template("Tuna Steaks", "Meat & Seafood", "Ocean Blue", "300g", "300g", 14.00),
    Template("Fish Fillets Basa", "Meat & Seafood", "Ocean Blue", "500g", "500g", 8.00),
    // Bakery
    Template("White Bread", "Bakery", "Tip Top", "700g", "700g", 3.50),
    Template("Wholemeal Bread", "Bakery", "Tip Top", "700g", "700g", 4.00),
    Template("Sourdough Bread", "Bakery", "Bakers Delight", "680g", "680g", 6.00),
    Template("Multigrain Bread", "Bakery", "Helga's", "700g", "700g", 4.50),
    Template("Croissants", "Bakery", "Bakers Delight", "4 Pack", "4pk", 4.50),
    Template("English Muffins", "Bakery", "Tip Top", "6 Pack", "6pk", 4.00),
    Template("Wraps Wholemeal", "Bakery", "Mission", "8 Pack", "8pk", 4.50),
    Template("Pita Bread", "Bakery", "Mission", "6 Pack", "6pk", 3.50),
    Template("Bagels", "Bakery", "Tip Top", "4 Pack", "4pk", 4.50),
    Template("Crumpets", "Bakery", "Golden", "6 Pack", "6pk", 3.50),
    Template("Banana Bread", "Bakery", "Bakers Delight", "450g", "450g", 6.50),
    Template("Hot Dog Rolls", "Bakery", "Tip Top", "6 Pack", "6pk", 3.50),
    Template("Burger Buns", "Bakery", "Tip Top", "6 Pack", "6pk", 4.00),
    Template("Ciabatta Rolls", "Bakery", "Bakers Delight", "4 Pack", "4pk", 5.00),
    Template("Raisin Toast", "Bakery", "Tip Top", "520g", "520g", 5.00),
    // Pantry
    Template("Basmati Rice", "Pantry", "SunRice", "1kg", "kg", 4.00),
    Template("Jasmine Rice", "Pantry", "SunRice", "2kg", "2kg", 6.00),
    Template("Brown Rice", "Pantry", "SunRice", "1kg", "kg", 4.50),
    Template("Spaghetti Pasta", "Pantry", "San Remo", "500g", "500g", 2.50),
    Template("Penne Pasta", "Pantry", "San Remo", "500g", "500g", 2.50),
    Template("Fusilli Pasta", "Pantry", "Barilla", "500g", "500g", 3.00),
    Template("Olive Oil Extra Virgin", "Pantry", "Cobram Estate", "750ml", "750ml", 12.00),
    Template("Vegetable Oil", "Pantry", "Crisco", "2L", "2L", 6.00),
    Template("Canned Tomatoes", "Pantry", "Ardmona", "400g", "400g", 1.50),
    Template("Tomato Paste", "Pantry", "Leggo's", "140g", "140g", 1.80),
    Template("Pasta Sauce Bolognese", "Pantry", "Dolmio", "500g", "500g", 4.00),
    Template("Peanut Butter Smooth", "Pantry", "Sanitarium", "375g", "375g", 4.50),
    Template("Peanut Butter Crunchy", "Pantry", "Bega", "375g", "375g", 4.50),
    Template("Vegemite", "Pantry", "Kraft", "380g", "380g", 6.00),
    Template("Honey", "Pantry", "Capilano", "500g", "500g", 8.00),
    Template("Maple Syrup", "Pantry", "Queen", "250ml", "250ml", 7.00),
    Template("Canned Tuna", "Pantry", "John West", "185g", "185g", 3.50),
    Template("Baked Beans", "Pantry", "Heinz", "420g", "420g", 2.50),
    Template("Chickpeas", "Pantry", "Edgell", "400g", "400g", 1.80),
    Template("Sugar White", "Pantry", "CSR", "1kg", "kg", 2.50),
    Template("Plain Flour", "Pantry", "White Wings", "1kg", "kg", 2.00),
    Template("Self Raising Flour", "Pantry", "White Wings", "1kg", "kg", 2.20),
    Template("Rolled Oats", "Pantry", "Uncle Tobys", "1kg", "kg", 4.00),
    Template("Cornflakes", "Pantry", "Kellogg's", "500g", "500g", 4.50),
    // Frozen
    Template("Frozen Peas", "Frozen", "Birds Eye", "500g", "500g", 2.50),
    Template("Frozen Mixed Vegetables", "Frozen", "Birds Eye", "500g", "500g", 3.00),
    Template("Fish Fingers", "Frozen", "Birds Eye", "375g", "375g", 5.00),
    Template("Crumbed Fish Fillets", "Frozen", "I&J", "400g", "400g", 7.00),
    Template("Frozen Pizza Margherita", "Frozen", "McCain", "500g", "500g", 6.50),
    Template("Frozen Pizza Pepperoni", "Frozen", "Dr Oetker", "390g", "390g", 7.50),
    Template("Ice Cream Vanilla", "Frozen", "Streets", "2L", "2L", 7.00),
    Template("Ice Cream Chocolate", "Frozen", "Connoisseur", "1L", "1L", 10.00),
    Template("Frozen Berries Mix", "Frozen", "Creative Gourmet", "500g", "500g", 6.00),
    Template("Frozen Mango", "Frozen", "Creative Gourmet", "500g", "500g", 5.50),
    Template("Chicken Nuggets", "Frozen", "Steggles", "1kg", "kg", 9.00),
    Template("Potato Chips Frozen", "Frozen", "McCain", "1kg", "kg", 5.00),
    Template("Hash Browns", "Frozen", "McCain", "700g", "700g", 4.50),
    Template("Frozen Spinach", "Frozen", "Birds Eye", "500g", "500g", 3.50),
    // Beverages
    Template("Coca-Cola", "Beverages", "Coca-Cola", "1.25L", "1.25L", 3.00),
    Template("Coca-Cola Zero", "Beverages", "Coca-Cola", "1.25L", "1.25L", 3.00),
    Template("Pepsi", "Beverages", "Pepsi", "1.25L", "1.25L", 2.80),
    Template("Orange Juice Fresh", "Beverages", "Nudie", "2L", "2L", 6.00),
    Template("Apple Juice", "Beverages", "Golden Circle", "2L", "2L", 4.50),
    Template("Sparkling Water", "Beverages", "Mount Franklin", "1.25L", "1.25L", 2.50),
    Template("Spring Water", "Beverages", "Mount Franklin", "1.5L", "1.5L", 1.80),
    Template("Instant Coffee", "Beverages", "Nescafe", "150g", "150g", 8.00),
    Template("Ground Coffee", "Beverages", "Lavazza", "250g", "250g", 10.00),
    Template("Tea Bags English Breakfast", "Beverages", "Twinings", "100pk", "100pk", 6.50),
    Template("Green Tea Bags", "Beverages", "Lipton", "50pk", "50pk", 4.50),
    Template("Energy Drink", "Beverages", "Red Bull", "250ml", "250ml", 3.50),
    Template("Sports Drink", "Beverages", "Gatorade", "600ml", "600ml", 3.00),
    Template("Iced Coffee", "Beverages", "Dare", "500ml", "500ml", 4.00),
    // Snacks
    Template("Tim Tams Original", "Snacks", "Arnott's", "200g", "200g", 4.00),
    Template("Tim Tams Double Coat", "Snacks", "Arnott's", "200g", "200g", 4.50),
    Template("Chips Original Salted", "Snacks", "Smith's", "170g", "170g", 4.50),
    Template("Chips Salt & Vinegar", "Snacks", "Kettle", "175g", "175g", 5.00),
    Template("Chips BBQ", "Snacks", "Red Rock Deli", "165g", "165g", 5.50),
    Template("Chocolate Block Dairy Milk", "Snacks", "Cadbury", "180g", "180g", 5.00),
    Template("Chocolate Block Dark", "Snacks", "Lindt", "100g", "100g", 5.50),
    Template("Mixed Nuts Unsalted", "Snacks", "Coles", "375g", "375g", 8.00),
    Template("Almonds Natural", "Snacks", "Blue Diamond", "400g", "400g", 10.00),
    Template("Granola Bars", "Snacks", "Carman's", "6pk", "6pk", 5.50),
    Template("Popcorn Sea Salt", "Snacks", "Cobs", "120g", "120g", 3.50),
    Template("Rice Crackers", "Snacks", "Sakata", "100g", "100g", 3.00),
    Template("Dried Mango", "Snacks", "Macro", "150g", "150g", 5.00),
    Template("Trail Mix", "Snacks", "Coles", "500g", "500g", 7.00),
    Template("Corn Chips", "Snacks", "Doritos", "170g", "170g", 4.50),
    Template("Biscuits Chocolate", "Snacks", "Arnott's", "250g", "250g", 4.00),
    // Household
    Template("Toilet Paper", "Household", "Quilton", "12pk", "12pk", 8.00),
    Template("Paper Towels", "Household", "Viva", "3pk", "3pk", 5.00),
    Template("Dish Washing Liquid", "Household", "Morning Fresh", "900ml", "900ml", 4.50),
    Template("Laundry Powder", "Household", "OMO", "2kg", "2kg", 12.00),
    Template("Laundry Liquid", "Household", "Cold Power", "2L", "2L", 14.00),
    Template("Fabric Softener", "Household", "Comfort", "2L", "2L", 6.00),
    Template("Garbage Bags Large", "Household", "Glad", "20pk", "20pk", 6.00),
    Template("Cling Wrap", "Household", "Glad", "150m", "150m", 5.00),
    Template("Aluminium Foil", "Household", "Alfoil", "30m", "30m", 4.50),
    Template("All Purpose Cleaner", "Household", "Ajax", "750ml", "750ml", 4.00),
    Template("Sponges", "Household", "Chux", "5pk", "5pk", 4.00),
    Template("Dishwasher Tablets", "Household", "Finish", "30pk", "30pk", 15.00),
    // Personal Care
    Template("Shampoo", "Personal Care", "Pantene", "350ml", "350ml", 7.00),
    Template("Conditioner", "Personal Care", "Pantene", "350ml", "350ml", 7.00),
    Template("Body Wash", "Personal Care", "Dove", "400ml", "400ml", 6.00),
    Template("Soap Bar", "Personal Care", "Dove", "4pk", "4pk", 5.00),
    Template("Toothpaste", "Personal Care", "Colgate", "175g", "175g", 4.00),
    Template("Toothbrush", "Personal Care", "Oral B", "2pk", "2pk", 6.00),
    Template("Deodorant", "Personal Care", "Rexona", "150ml", "150ml", 5.00),
    Template("Razor", "Personal Care", "Gillette", "4pk", "4pk", 15.00),
    Template("Tissues", "Personal Care", "Kleenex", "95pk", "95pk", 2.50),
    Template("Hand Sanitiser", "Personal Care", "Dettol", "500ml", "500ml", 6.00),
    Template("Sunscreen SPF50", "Personal Care", "Cancer Council", "200ml", "200ml", 12.00),
    Template("Face Wash", "Personal Care", "Cetaphil", "250ml", "250ml", 10.00),
];

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate the trailing 30 days plus today of price history, oldest first.
fn generate_price_history<R: Rng + ?Sized>(rng: &mut R, base_price: f64, days: i64) -> Vec<HistoryPoint> {
    let today = Utc::now();
    let mut history = Vec::with_capacity((days + 1) as usize);

    for i in (0..=days).rev() {
        let date = today - Duration::days(i);
        let mut variation = rng.gen_range(-0.15..0.15);
        // Roughly one day in five is a sale day.
        if rng.gen::<f64>() < 0.2 {
            variation = rng.gen_range(-0.25..-0.15);
        }

        history.push(HistoryPoint {
            date: date.format("%Y-%m-%d").to_string(),
            price: round2(base_price * (1.0 + variation)),
            was_on_sale: variation < -0.15,
        });
    }

    history
}

fn generate_store_prices<R: Rng + ?Sized>(rng: &mut R, base_price: f64) -> StorePrices {
    let mut prices = StorePrices::default();

    for store in StoreKey::ALL {
        let variation = rng.gen_range(0.80..1.30);
        let mut price = round2(base_price * variation);

        // Discounters run cheaper, IGA a touch dearer.
        price = match store {
            StoreKey::Aldi => round2(price * 0.90),
            StoreKey::Costco => round2(price * 0.85),
            StoreKey::Iga => round2(price * 1.05),
            _ => price,
        };

        *prices.get_mut(store) = PriceEntry {
            price,
            available: rng.gen::<f64>() > 0.1,
            on_special: rng.gen::<f64>() < 0.2,
        };
    }

    prices
}

/// The in-memory product catalogue.
///
/// Generated once at process start and read-only afterwards; safe to share
/// across request handlers behind an `Arc` without locking.
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Generate the catalogue with an OS-seeded generator.
    pub fn generate() -> Self {
        Self::generate_with_rng(&mut rand::thread_rng())
    }

    /// Generate a deterministic catalogue for tests.
    pub fn generate_seeded(seed: u64) -> Self {
        Self::generate_with_rng(&mut StdRng::seed_from_u64(seed))
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let now = Utc::now();
        let products = TEMPLATES
            .iter()
            .map(|t| Product {
                id: format!("prod-{}", nanoid::nanoid!()),
                name: t.0.to_string(),
                category: t.1.to_string(),
                brand: t.2.to_string(),
                size: t.3.to_string(),
                unit: t.4.to_string(),
                image: String::new(),
                store_prices: generate_store_prices(rng, t.5),
                price_history: generate_price_history(rng, t.5, 30),
                created_at: now,
                source: "mock".to_string(),
            })
            .collect();

        Catalog { products }
    }

    /// Build a catalogue from explicit products (tests, fixtures).
    pub fn from_products(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// All products in stable catalogue order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_product_has_a_full_price_map_and_history() {
        let catalog = Catalog::generate_seeded(7);
        assert_eq!(catalog.len(), TEMPLATES.len());

        for product in catalog.products() {
            assert_eq!(product.price_history.len(), 31);
            for (_, entry) in product.store_prices.iter() {
                assert!(entry.price >= 0.0);
            }
        }
    }

    #[test]
    fn history_is_oldest_first_and_flags_sales() {
        let catalog = Catalog::generate_seeded(7);
        let history = &catalog.products()[0].price_history;
        assert!(history.first().unwrap().date < history.last().unwrap().date);
        for point in history {
            assert!(point.price > 0.0);
        }
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let a = Catalog::generate_seeded(42);
        let b = Catalog::generate_seeded(42);
        for (pa, pb) in a.products().iter().zip(b.products()) {
            assert_eq!(pa.store_prices, pb.store_prices);
        }
    }

    #[test]
    fn product_lookup_by_id() {
        let catalog = Catalog::generate_seeded(7);
        let first = &catalog.products()[0];
        assert_eq!(catalog.product_by_id(&first.id).unwrap().name, first.name);
        assert!(catalog.product_by_id("prod-missing").is_none());
    }
}
