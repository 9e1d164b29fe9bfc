// Strategy: the cart delegates payment to whichever method it was built with.

use crate::console::Transcript;

pub trait PaymentStrategy {
    fn pay(&self, amount: u64, out: &mut Transcript);
}

#[derive(Debug, Clone)]
pub struct CreditCardPayment {
    card_number: String,
}

impl CreditCardPayment {
    pub fn new(card_number: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
        }
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: u64, out: &mut Transcript) {
        out.say(format!(
            "Paying ${amount} with Credit Card: {}",
            self.card_number
        ));
    }
}

#[derive(Debug, Clone)]
pub struct PayPalPayment {
    email: String,
}

impl PayPalPayment {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: u64, out: &mut Transcript) {
        out.say(format!("Paying ${amount} with PayPal: {}", self.email));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub name: String,
    pub price: u64,
}

/// Cart generic over its payment method, so the strategy is fixed at
/// compile time.
#[derive(Debug)]
pub struct ShoppingCart<S> {
    items: Vec<LineItem>,
    strategy: S,
}

impl<S: PaymentStrategy> ShoppingCart<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            items: Vec::new(),
            strategy,
        }
    }

    pub fn add_item(&mut self, name: impl Into<String>, price: u64) {
        self.items.push(LineItem {
            name: name.into(),
            price,
        });
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn calculate_total(&self) -> u64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Same items, different payment method.
    pub fn with_strategy<T: PaymentStrategy>(self, strategy: T) -> ShoppingCart<T> {
        ShoppingCart {
            items: self.items,
            strategy,
        }
    }

    pub fn checkout(&self, out: &mut Transcript) -> u64 {
        let total = self.calculate_total();
        self.strategy.pay(total, out);
        total
    }
}

fn sample_cart<S: PaymentStrategy>(strategy: S) -> ShoppingCart<S> {
    let mut cart = ShoppingCart::new(strategy);
    cart.add_item("Keyboard", 60);
    cart.add_item("Mouse", 40);
    cart
}

pub fn demo(out: &mut Transcript) {
    let credit_card = CreditCardPayment::new("1234 5678 9012 3456");
    let paypal = PayPalPayment::new("example@example.com");

    let cart1 = sample_cart(credit_card);
    let cart2 = sample_cart(paypal);

    cart1.checkout(out);
    cart2.checkout(out);
}
