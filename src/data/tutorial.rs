use crate::shared::*;

pub fn populate_tutorial(script: &mut TutorialScript) {
    let messages = [
        "Welcome to Sproutvale! Walk with WASD or the arrow keys.",
        "Press 1-9 to equip a tool. Press the same number again to put it away.",
        "Press R to pick a seed, then use the Spade (Space) on the soil in front of you.",
        "Seeds only grow while watered. Use the Watering Can on your crops.",
        "When a crop is ripe, harvest it with the Scythe or press F empty-handed.",
        "Visit the market with F to sell your harvest and buy new seeds.",
        "Rest at home with F to skip ahead six hours.",
    ];
    script.steps = messages
        .iter()
        .map(|message| TutorialStep {
            message: message.to_string(),
            display_time: 5.0,
        })
        .collect();
}
