//! Canned replies used when the provider cannot answer.
//!
//! Topic-specific replies are matched by keyword, first hit wins; anything
//! else gets the generic menu.

pub const GENERIC_FALLBACK: &str = "I'm here to help with your educational journey! You can ask me about:

📚 Study Habits & Learning Techniques
• Effective note-taking methods
• Time management strategies
• Memory improvement techniques
• Active learning approaches

💼 Career Guidance
• Career paths in various fields
• Industry trends and opportunities
• Skill development recommendations
• Professional networking tips

🧮 Math & Problem Solving
• Step-by-step problem-solving approaches
• Mathematical concept explanations
• Practice strategies for different topics
• Common mistake prevention

💻 Programming & Technology
• Learning programming languages
• Project-based learning approaches
• Debugging and problem-solving
• Industry best practices

📝 Exam Preparation
• Study schedule planning
• Test-taking strategies
• Stress management techniques
• Review and revision methods

🔬 Subject-Specific Help
• Physics, Chemistry, Biology concepts
• Literature and writing skills
• History and social studies
• Language learning strategies

What specific area would you like to explore?";

const MACHINE_LEARNING_GUIDE: &str = "Machine learning is a great field to study! Here is a practical roadmap:

1. Build the foundations
• Linear algebra: vectors, matrices, matrix multiplication
• Calculus: derivatives, gradients, the chain rule
• Probability and statistics: distributions, expectation, Bayes' rule

2. Learn the tools
• Python, plus NumPy and pandas for working with data
• scikit-learn for classic models
• PyTorch or TensorFlow once you reach neural networks

3. Understand the core ideas
• Supervised learning: regression and classification
• Unsupervised learning: clustering and dimensionality reduction
• Training vs. validation vs. test data, overfitting and regularization
• Evaluation metrics: accuracy, precision, recall, F1, mean squared error

4. Practice with projects
• Start with a small, clean dataset (for example Iris or Titanic)
• Reproduce a tutorial end to end, then change one thing and measure the effect
• Enter a beginner competition on Kaggle
• Keep notes on what worked and why

5. Keep going
• Take a structured course such as Andrew Ng's Machine Learning course
• Read the documentation of the libraries you use
• Share your projects on GitHub to build a portfolio

Study tip: spend about half your time on math and concepts and half on hands-on coding. Small, regular sessions beat occasional marathons.

Which part would you like to dig into first?";

/// Ordered keyword table; keywords are lowercase.
const KEYWORD_FALLBACKS: &[(&str, &str)] = &[("machine learning", MACHINE_LEARNING_GUIDE)];

/// Picks the canned reply for `message`.
pub fn fallback_for(message: &str) -> &'static str {
    let lowered = message.to_lowercase();
    KEYWORD_FALLBACKS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, text)| *text)
        .unwrap_or(GENERIC_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_for_unmatched_message() {
        assert_eq!(fallback_for("How should I revise for chemistry?"), GENERIC_FALLBACK);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        assert_eq!(
            fallback_for("Where do I start with Machine Learning?"),
            MACHINE_LEARNING_GUIDE
        );
        assert_eq!(fallback_for("MACHINE LEARNING careers"), MACHINE_LEARNING_GUIDE);
    }

    #[test]
    fn test_partial_keyword_does_not_match() {
        assert_eq!(fallback_for("I like learning about machines"), GENERIC_FALLBACK);
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for (keyword, _) in KEYWORD_FALLBACKS {
            assert_eq!(*keyword, keyword.to_lowercase());
        }
    }
}
