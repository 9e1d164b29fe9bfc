// Template Method: `prepare_recipe` fixes the order, recipes fill in the steps.

use crate::console::Transcript;

pub trait Recipe {
    fn name(&self) -> &str;
    fn prepare_ingredients(&self, out: &mut Transcript);
    fn cook(&self, out: &mut Transcript);
    fn serve(&self, out: &mut Transcript);

    /// Optional step between cooking and serving. Does nothing by default.
    fn garnish(&self, _out: &mut Transcript) {}

    /// The skeleton. Recipes should not override this.
    fn prepare_recipe(&self, out: &mut Transcript) {
        self.prepare_ingredients(out);
        self.cook(out);
        self.garnish(out);
        self.serve(out);
    }
}

pub struct PastaRecipe;

impl Recipe for PastaRecipe {
    fn name(&self) -> &str {
        "Pasta"
    }

    fn prepare_ingredients(&self, out: &mut Transcript) {
        out.say("Gather pasta, sauce, cheese, and spices.");
    }

    fn cook(&self, out: &mut Transcript) {
        out.say("Boil pasta, heat sauce, and mix together.");
    }

    fn garnish(&self, out: &mut Transcript) {
        out.say("Top with fresh basil.");
    }

    fn serve(&self, out: &mut Transcript) {
        out.say("Serve hot pasta with sauce and cheese.");
    }
}

pub struct CakeRecipe;

impl Recipe for CakeRecipe {
    fn name(&self) -> &str {
        "Cake"
    }

    fn prepare_ingredients(&self, out: &mut Transcript) {
        out.say("Gather flour, sugar, eggs, butter, and baking powder.");
    }

    fn cook(&self, out: &mut Transcript) {
        out.say("Mix ingredients, bake the cake, and let it cool.");
    }

    fn serve(&self, out: &mut Transcript) {
        out.say("Serve delicious cake.");
    }
}

pub fn demo(out: &mut Transcript) {
    let recipes: [&dyn Recipe; 2] = [&PastaRecipe, &CakeRecipe];

    for (i, recipe) in recipes.iter().enumerate() {
        if i > 0 {
            out.blank();
        }
        out.say(format!("Preparing {} Recipe:", recipe.name()));
        recipe.prepare_recipe(out);
    }
}
