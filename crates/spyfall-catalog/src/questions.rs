//! The helper-question catalog.

/// Conversation-starter prompts surfaced (three at a time) once every
/// player has seen their role. The first block probes the location, the
/// second block probes the role.
pub const HELPER_QUESTIONS: [&str; 35] = [
    // Location questions
    "What brings you here today?",
    "How are you feeling while here?",
    "Would you bring your family here?",
    "Would you bring a date here?",
    "Do you like coming here?",
    "How often do you come here?",
    "What is the most common thing people do here?",
    "What's the weather like here?",
    "What time of day is it?",
    "Are most people here for work or play/fun?",
    "Is this place positive or negative?",
    "How long do most people stay here?",
    "Can you see any landmarks from where you are?",
    "What's the mood or atmosphere in this place?",
    "What's the most interesting thing you've seen here?",
    "What do you see out the window?",
    "Describe the people around you.",
    "What do you smell?",
    "What kind of activities can you do in this place?",
    "Are there any special rules or regulations at this location?",
    // Role questions
    "How did you get here?",
    "What time does your job start?",
    "What time does your job end?",
    "What are you holding in your hand?",
    "What is your role's responsibility in this location?",
    "What tools or equipment does your role use at this location?",
    "What challenges do you face in your role?",
    "Can you share a memorable experience related to your role?",
    "Are there any specific interactions you have in your role?",
    "How do you handle difficult situations in your role?",
    "What skills are essential for someone in your role?",
    "Is your role important?",
    "Can you describe a typical day in your role?",
    "Would you want to be this role?",
    "Do you know anyone who has your role in real life?",
];
