//! Prompt construction for the generation endpoint.

/// Minimal probe sent once at startup to verify connectivity and
/// credentials before the enhancer is marked Enabled.
pub const SELF_TEST_PROMPT: &str = "Reply with the single word: ok";

/// Build the enhancement prompt for one prediction.
///
/// Embeds the predicted condition and the raw symptom text, and demands a
/// single JSON object with the exact key set the merge step understands.
/// The model is allowed to wrap prose around the object; only the embedded
/// JSON is trusted downstream.
pub fn build_enhancement_prompt(condition: &str, symptoms: &str) -> String {
    format!(
        r#"You are a careful medical information assistant. You provide general,
non-diagnostic guidance about a predicted condition. You never claim
certainty and you always recommend professional consultation for anything
serious.

Patient-reported symptoms: {symptoms}
Predicted condition: {condition}

Provide practical guidance covering:
1. A clear description of the condition.
2. A severity assessment: exactly one of Mild, Moderate or Severe.
3. Five to seven specific safety precautions.
4. Commonly used over-the-counter or prescription medication classes.
5. Traditional or herbal remedies in common use, with preparation notes.
6. Home remedies using everyday household ingredients.
7. A dietary plan: foods that help, foods to avoid, and meal timing.
8. Suitable light exercises or activities, and what to avoid while unwell.
9. When and how urgently to seek medical consultation.

If the symptoms could indicate a serious condition, emphasize urgent
consultation while still giving the guidance above.

Respond with a JSON object of this exact shape:
{{
    "description": "detailed description",
    "severity": "Mild/Moderate/Severe",
    "precautions": ["precaution1", "precaution2"],
    "medications": ["medication1", "medication2"],
    "traditionalMedicines": ["remedy1", "remedy2"],
    "homeRemedies": ["remedy1", "remedy2"],
    "diet": "comprehensive diet plan",
    "workouts": ["activity1", "activity2"],
    "consultationAdvice": "consultation guidance"
}}"#
    )
}
