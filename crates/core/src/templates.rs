//! Static Question Templates
//!
//! Every subject carries exactly three multiple-choice and three
//! short-answer templates. Question text may contain a `{topic}` placeholder
//! which is filled in by [`render`].

/// Subjects with their own template table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Mathematics,
    Science,
    English,
    History,
}

impl Subject {
    /// Resolves a free-form subject name. Unknown names fall back to mathematics.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "mathematics" | "math" | "maths" => Subject::Mathematics,
            "science" => Subject::Science,
            "english" => Subject::English,
            "history" => Subject::History,
            _ => Subject::Mathematics,
        }
    }

    pub fn templates(self) -> &'static SubjectTemplates {
        match self {
            Subject::Mathematics => &MATHEMATICS,
            Subject::Science => &SCIENCE,
            Subject::English => &ENGLISH,
            Subject::History => &HISTORY,
        }
    }
}

#[derive(Debug)]
pub struct McqTemplate {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct_answer: &'static str,
}

#[derive(Debug)]
pub struct ShortTemplate {
    pub question: &'static str,
    pub expected_length: &'static str,
}

#[derive(Debug)]
pub struct SubjectTemplates {
    pub mcq: [McqTemplate; 3],
    pub short: [ShortTemplate; 3],
}

/// Returns the template table for a subject name.
pub fn templates_for(subject: &str) -> &'static SubjectTemplates {
    Subject::from_key(subject).templates()
}

/// Interpolates the topic into a template string.
pub fn render(template: &str, topic: &str) -> String {
    template.replace("{topic}", topic)
}

static MATHEMATICS: SubjectTemplates = SubjectTemplates {
    mcq: [
        McqTemplate {
            question: "{topic}: Solve for x: 2x + 5 = 13",
            options: ["x = 3", "x = 4", "x = 5", "x = 9"],
            correct_answer: "B",
        },
        McqTemplate {
            question: "{topic}: If y = 3x - 2, what is y when x = 4?",
            options: ["8", "10", "12", "14"],
            correct_answer: "B",
        },
        McqTemplate {
            question: "{topic}: What is 15% of 200?",
            options: ["15", "20", "30", "35"],
            correct_answer: "C",
        },
    ],
    short: [
        ShortTemplate {
            question: "Explain {topic} in your own words and give one everyday example.",
            expected_length: "3-4 sentences",
        },
        ShortTemplate {
            question: "Describe the steps you would follow to solve a problem on {topic}.",
            expected_length: "4-5 sentences",
        },
        ShortTemplate {
            question: "Write a word problem that uses {topic} and solve it.",
            expected_length: "1 short paragraph",
        },
    ],
};

static SCIENCE: SubjectTemplates = SubjectTemplates {
    mcq: [
        McqTemplate {
            question: "{topic}: Which gas do plants absorb during photosynthesis?",
            options: ["Oxygen", "Nitrogen", "Carbon dioxide", "Hydrogen"],
            correct_answer: "C",
        },
        McqTemplate {
            question: "{topic}: What is the SI unit of force?",
            options: ["Joule", "Newton", "Watt", "Pascal"],
            correct_answer: "B",
        },
        McqTemplate {
            question: "{topic}: Which part of the cell contains genetic material?",
            options: ["Cell wall", "Cytoplasm", "Nucleus", "Vacuole"],
            correct_answer: "C",
        },
    ],
    short: [
        ShortTemplate {
            question: "Explain the key idea behind {topic} with the help of a simple experiment.",
            expected_length: "3-4 sentences",
        },
        ShortTemplate {
            question: "How does {topic} affect our daily life? Give two examples.",
            expected_length: "3-4 sentences",
        },
        ShortTemplate {
            question: "List the main observations you would record while studying {topic}.",
            expected_length: "4-5 points",
        },
    ],
};

static ENGLISH: SubjectTemplates = SubjectTemplates {
    mcq: [
        McqTemplate {
            question: "{topic}: Choose the correct sentence.",
            options: [
                "She go to school daily.",
                "She goes to school daily.",
                "She going to school daily.",
                "She gone to school daily.",
            ],
            correct_answer: "B",
        },
        McqTemplate {
            question: "{topic}: Which of these words is a noun?",
            options: ["Quickly", "Happiness", "Run", "Beautiful"],
            correct_answer: "B",
        },
        McqTemplate {
            question: "{topic}: Pick the synonym of 'brave'.",
            options: ["Courageous", "Timid", "Lazy", "Weak"],
            correct_answer: "A",
        },
    ],
    short: [
        ShortTemplate {
            question: "Write a short paragraph about {topic} using at least three adjectives.",
            expected_length: "5-6 sentences",
        },
        ShortTemplate {
            question: "Explain the rule behind {topic} and give two example sentences.",
            expected_length: "3-4 sentences",
        },
        ShortTemplate {
            question: "Summarise what you have learnt about {topic} in your own words.",
            expected_length: "2-3 sentences",
        },
    ],
};

static HISTORY: SubjectTemplates = SubjectTemplates {
    mcq: [
        McqTemplate {
            question: "{topic}: In which year did India gain independence?",
            options: ["1945", "1947", "1950", "1952"],
            correct_answer: "B",
        },
        McqTemplate {
            question: "{topic}: Who was the first Prime Minister of India?",
            options: [
                "Jawaharlal Nehru",
                "Sardar Patel",
                "B. R. Ambedkar",
                "Rajendra Prasad",
            ],
            correct_answer: "A",
        },
        McqTemplate {
            question: "{topic}: The Harappan civilisation developed along which river?",
            options: ["Ganga", "Yamuna", "Indus", "Godavari"],
            correct_answer: "C",
        },
    ],
    short: [
        ShortTemplate {
            question: "Describe the main causes and effects of {topic}.",
            expected_length: "4-5 sentences",
        },
        ShortTemplate {
            question: "Why is {topic} important for understanding our past?",
            expected_length: "3-4 sentences",
        },
        ShortTemplate {
            question: "Name two important figures connected to {topic} and their contributions.",
            expected_length: "3-4 sentences",
        },
    ],
};
