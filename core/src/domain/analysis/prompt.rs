/// Instruction sent alongside every captured frame. The parser depends on the
/// line format requested here.
pub const INGREDIENT_ANALYSIS_PROMPT: &str = "Analyze this food packaging image and list all ingredients. For each ingredient provide:\n1. Ingredient name followed by colon\n2. Harm Scale (1-10, 10 being most harmful)\n3. Potential diseases or health concerns associated with excessive consumption\n\nFormat each ingredient as:\nIngredient Name:\nHarm Scale: X/10\nPotential Health Concerns: disease1, disease2, etc.";
