// Builder: a pizza assembled step by step, with a waiter acting as director.

use std::fmt;

use crate::console::Transcript;
use crate::error::PatternError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    size: String,
    crust: String,
    toppings: Vec<String>,
}

impl Pizza {
    pub fn builder() -> PizzaBuilder {
        PizzaBuilder::new()
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn crust(&self) -> &str {
        &self.crust
    }

    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Size: {}, Crust: {}, Toppings: {}",
            self.size,
            self.crust,
            self.toppings.join(", ")
        )
    }
}

/// Consuming builder: every `build` yields an independent pizza.
#[derive(Debug, Default)]
pub struct PizzaBuilder {
    size: Option<String>,
    crust: Option<String>,
    toppings: Vec<String>,
}

impl PizzaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn crust(mut self, crust: impl Into<String>) -> Self {
        self.crust = Some(crust.into());
        self
    }

    pub fn topping(mut self, topping: impl Into<String>) -> Self {
        self.toppings.push(topping.into());
        self
    }

    pub fn toppings<I, T>(mut self, toppings: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.toppings.extend(toppings.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<Pizza, PatternError> {
        Ok(Pizza {
            size: self.size.ok_or(PatternError::MissingField("size"))?,
            crust: self.crust.ok_or(PatternError::MissingField("crust"))?,
            toppings: self.toppings,
        })
    }
}

/// Director: knows the order in which to drive the builder.
#[derive(Debug, Default)]
pub struct Waiter;

impl Waiter {
    pub fn construct_pizza(
        &self,
        size: &str,
        crust: &str,
        toppings: &[&str],
    ) -> Result<Pizza, PatternError> {
        Pizza::builder()
            .size(size)
            .crust(crust)
            .toppings(toppings.iter().copied())
            .build()
    }
}

fn run(out: &mut Transcript) -> Result<(), PatternError> {
    let pizza1 = Pizza::builder()
        .size("Medium")
        .crust("Thin")
        .topping("Cheese")
        .topping("Mushrooms")
        .build()?;
    let pizza2 = Pizza::builder()
        .size("Large")
        .crust("Thick")
        .topping("Pepperoni")
        .topping("Olives")
        .build()?;

    out.say(format!("Pizza 1: {pizza1}"));
    out.say(format!("Pizza 2: {pizza2}"));

    let waiter = Waiter;
    let pizza3 = waiter.construct_pizza("Small", "Regular", &["Onions", "Bell Peppers", "Sausage"])?;
    out.say(format!("Pizza 3: {pizza3}"));

    Pizza::builder().size("Large").topping("Ham").build()?;
    Ok(())
}

pub fn demo(out: &mut Transcript) {
    if let Err(err) = run(out) {
        out.error(err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let pizza = Pizza::builder()
            .size("Medium")
            .crust("Thin")
            .topping("Cheese")
            .topping("Mushrooms")
            .build()
            .unwrap();

        assert_eq!(
            pizza.to_string(),
            "Size: Medium, Crust: Thin, Toppings: Cheese, Mushrooms"
        );
    }

    #[test]
    fn test_builds_are_independent() {
        let first = Pizza::builder().size("S").crust("C").topping("A").build().unwrap();
        let second = Pizza::builder().size("L").crust("D").topping("B").build().unwrap();

        assert_eq!(first.toppings(), ["A"]);
        assert_eq!(second.toppings(), ["B"]);
        assert_eq!(second.size(), "L");
    }

    #[test]
    fn test_missing_size() {
        let err = Pizza::builder().crust("Thin").build().unwrap_err();
        assert!(matches!(err, PatternError::MissingField("size")));
    }

    #[test]
    fn test_missing_crust() {
        let err = Pizza::builder().size("Small").build().unwrap_err();
        assert!(matches!(err, PatternError::MissingField("crust")));
    }

    #[test]
    fn test_no_toppings_is_fine() {
        let pizza = Pizza::builder().size("Small").crust("Thin").build().unwrap();
        assert_eq!(pizza.to_string(), "Size: Small, Crust: Thin, Toppings: ");
    }

    #[test]
    fn test_waiter_adds_each_topping() {
        let pizza = Waiter
            .construct_pizza("Small", "Regular", &["Onions", "Bell Peppers", "Sausage"])
            .unwrap();

        assert_eq!(pizza.toppings().len(), 3);
        assert_eq!(pizza.crust(), "Regular");
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::buffered();
        demo(&mut out);
        assert_eq!(
            out.lines(),
            [
                "Pizza 1: Size: Medium, Crust: Thin, Toppings: Cheese, Mushrooms",
                "Pizza 2: Size: Large, Crust: Thick, Toppings: Pepperoni, Olives",
                "Pizza 3: Size: Small, Crust: Regular, Toppings: Onions, Bell Peppers, Sausage",
                "Missing required field: 'crust'",
            ]
        );
    }
}
