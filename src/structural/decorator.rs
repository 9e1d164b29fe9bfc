// Decorator: condiments wrap a coffee and add to its cost and description.

use crate::console::Transcript;

pub trait Coffee {
    fn cost(&self) -> u32;
    fn description(&self) -> String;
}

pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn cost(&self) -> u32 {
        5
    }

    fn description(&self) -> String {
        "Simple Coffee".to_string()
    }
}

pub struct Espresso;

impl Coffee for Espresso {
    fn cost(&self) -> u32 {
        8
    }

    fn description(&self) -> String {
        "Espresso".to_string()
    }
}

pub struct Milk<C>(pub C);

impl<C: Coffee> Coffee for Milk<C> {
    fn cost(&self) -> u32 {
        self.0.cost() + 2
    }

    fn description(&self) -> String {
        format!("{}, Milk", self.0.description())
    }
}

pub struct Sugar<C>(pub C);

impl<C: Coffee> Coffee for Sugar<C> {
    fn cost(&self) -> u32 {
        self.0.cost() + 1
    }

    fn description(&self) -> String {
        format!("{}, Sugar", self.0.description())
    }
}

// Lets decorators wrap a coffee chosen at runtime too.
impl Coffee for Box<dyn Coffee> {
    fn cost(&self) -> u32 {
        (**self).cost()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

pub fn describe(coffee: &dyn Coffee) -> String {
    format!("Cost: ${}, Description: {}", coffee.cost(), coffee.description())
}

pub fn demo(out: &mut Transcript) {
    let coffee = Espresso;
    out.say(describe(&coffee));

    let coffee_with_milk = Milk(coffee);
    out.say(describe(&coffee_with_milk));

    let coffee_with_milk_and_sugar = Sugar(coffee_with_milk);
    out.say(describe(&coffee_with_milk_and_sugar));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_base_coffees() {
        assert_eq!(SimpleCoffee.cost(), 5);
        assert_eq!(SimpleCoffee.description(), "Simple Coffee");
        assert_eq!(Espresso.cost(), 8);
    }

    #[test]
    fn test_stacked_decorators() {
        let coffee = Sugar(Milk(Espresso));
        assert_eq!(coffee.cost(), 11);
        assert_eq!(coffee.description(), "Espresso, Milk, Sugar");
    }

    #[test]
    fn test_same_decorator_twice() {
        let coffee = Milk(Milk(SimpleCoffee));
        assert_eq!(coffee.cost(), 9);
        assert_eq!(coffee.description(), "Simple Coffee, Milk, Milk");
    }

    #[test]
    fn test_wraps_runtime_choice() {
        let base: Box<dyn Coffee> = Box::new(SimpleCoffee);
        let coffee = Sugar(base);
        assert_eq!(describe(&coffee), "Cost: $6, Description: Simple Coffee, Sugar");
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::buffered();
        demo(&mut out);
        assert_eq!(
            out.lines(),
            [
                "Cost: $8, Description: Espresso",
                "Cost: $10, Description: Espresso, Milk",
                "Cost: $11, Description: Espresso, Milk, Sugar",
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_cost_is_additive(milks in 0usize..6, sugars in 0usize..6) {
            let mut coffee: Box<dyn Coffee> = Box::new(Espresso);
            for _ in 0..milks {
                coffee = Box::new(Milk(coffee));
            }
            for _ in 0..sugars {
                coffee = Box::new(Sugar(coffee));
            }

            prop_assert_eq!(coffee.cost() as usize, 8 + 2 * milks + sugars);
            prop_assert_eq!(coffee.description().matches(", Milk").count(), milks);
        }
    }
}
