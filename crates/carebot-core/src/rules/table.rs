//! The conversation rule table.
//!
//! Rules are listed in hand-authored priority order and the order is
//! load-bearing: the greeting check precedes the general "how are you" check,
//! and the pain-scale rules sit after the general pain-keyword rule, gated on
//! recent pain so a bare number only reads as a scale answer in context.
//!
//! Note the overlap between the early symptom rules and the numbered disease
//! rules further down (e.g. "headache"/"migraine" appear in both with
//! different pools, as do diabetes and hypertension). First-match-wins
//! resolves the tie in favor of the earlier block; the duplicate entries are
//! kept deliberately rather than merged, preserving the original ordering.

use super::{ContextGate, Rule, RuleMatcher};
use crate::session::VisualCue;

/// Prefix prepended to default responses on follow-up turns.
pub const FOLLOW_UP_PREFIX: &str = "I notice we've been discussing your health concerns. ";

/// Generic probing responses used when no rule matches.
pub const DEFAULT_POOL: &[&str] = &[
    "I am analyzing your input. My healthcare database contains information on over 10,000 medical conditions. Could you be more specific about your health concerns?",
    "Health assessment in progress. My sensors are calibrated to detect health irregularities. How are you feeling physically and emotionally today?",
    "Diagnostic mode activated. I am programmed to provide healthcare guidance based on symptoms and concerns. What aspect of your health would you like to discuss?",
    "Medical inquiry processing. My database suggests that maintaining open communication about health concerns improves outcomes. What brings you to seek healthcare advice today?",
    "Patient care protocol engaged. Regular health monitoring is important for early detection of issues. Are there any symptoms or concerns you'd like me to evaluate?",
];

/// The full priority-ordered rule table for the chat engine.
pub const RULE_TABLE: &[Rule] = &[
    Rule {
        name: "greeting",
        matcher: RuleMatcher::Keyword(&["hello", "hi", "hey"]),
        gate: None,
        pool: &[
            "Hello. I am Baymax, your personal healthcare companion. I have analyzed your voice pattern and you sound well today. How are you feeling?",
            "Greetings. I am Baymax. My sensors indicate normal ambient conditions. How may I assist with your healthcare needs today?",
            "Hello there. I am Baymax, programmed to provide healthcare assistance. My initial scan shows no immediate concerns. What brings you to me today?",
        ],
        visual: Some(VisualCue::Wave),
    },
    Rule {
        name: "how-are-you",
        matcher: RuleMatcher::Keyword(&["how are you"]),
        gate: None,
        pool: &[
            "I am a robot. I cannot feel emotions, but my diagnostic systems are operating at 100% efficiency. My primary concern is your wellbeing. How are you feeling today?",
        ],
        visual: Some(VisualCue::ThumbsUp),
    },
    Rule {
        name: "thanks",
        matcher: RuleMatcher::Keyword(&["thank"]),
        gate: None,
        pool: &[
            "You are welcome. Helping you achieve optimal health is my primary function.",
            "No thanks necessary. I am programmed to provide care. Is there anything else concerning your health?",
            "Your gratitude is noted. I am here whenever you need healthcare assistance.",
        ],
        visual: Some(VisualCue::ThumbsUp),
    },
    Rule {
        name: "goodbye",
        matcher: RuleMatcher::Keyword(&["bye", "goodbye"]),
        gate: None,
        pool: &[
            "I cannot deactivate until you confirm you are satisfied with your care. Are you satisfied with your care?",
        ],
        visual: None,
    },
    Rule {
        name: "satisfied",
        matcher: RuleMatcher::Keyword(&["satisfied"]),
        gate: None,
        pool: &[
            "Excellent. Until next time, remember to maintain proper nutrition, hydration, and sleep cycles. *deactivating*",
        ],
        visual: Some(VisualCue::ThumbsUp),
    },
    Rule {
        name: "pain",
        matcher: RuleMatcher::Keyword(&["pain", "hurt", "injured"]),
        gate: None,
        pool: &[
            "I am detecting signs of discomfort. On a scale of 1 to 10, how would you rate your pain level? I will now perform a diagnostic scan.",
            "Pain detected. My sensors indicate possible inflammation. Please describe the location and intensity of your discomfort for proper assessment.",
            "Analyzing pain symptoms... Location of pain is important for diagnosis. Can you specify where you are experiencing discomfort?",
        ],
        visual: Some(VisualCue::Caring),
    },
    // Pain-scale tiers. Only meaningful after pain came up, hence the gate;
    // thresholds 8 and 5 are contractual.
    Rule {
        name: "scale-urgent",
        matcher: RuleMatcher::ScaleRange { min: 8, max: u64::MAX },
        gate: Some(ContextGate::RecentPain),
        pool: &[
            "Pain level of 8 or above requires immediate medical attention. I recommend seeking emergency care. Please contact emergency services if pain is severe.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "scale-moderate",
        matcher: RuleMatcher::ScaleRange { min: 5, max: 7 },
        gate: Some(ContextGate::RecentPain),
        pool: &[
            "Moderate pain detected. I recommend rest, appropriate pain management, and monitoring symptoms. If pain persists or worsens, consult a healthcare professional.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "scale-mild",
        matcher: RuleMatcher::ScaleRange { min: 1, max: 4 },
        gate: Some(ContextGate::RecentPain),
        pool: &[
            "Low-level pain noted. Light activity, proper posture, and relaxation techniques may help. Continue monitoring your symptoms.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "headache",
        matcher: RuleMatcher::Keyword(&["headache", "migraine"]),
        gate: None,
        pool: &[
            "Cranial pressure detected. Analysis suggests possible tension headache. I recommend: dim lighting, quiet environment, gentle neck stretches, and hydration. Rate your pain level 1-10.",
            "Neurological discomfort identified. Migraine patterns often include light sensitivity. Try placing a cool compress on your forehead and rest in darkness.",
            "Head pain analysis complete. Triggers may include dehydration, poor posture, or stress. When did this headache begin?",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "fatigue",
        matcher: RuleMatcher::Keyword(&["tired", "fatigue", "exhausted"]),
        gate: None,
        pool: &[
            "Energy levels appear suboptimal. Analysis suggests possible causes: inadequate sleep, poor nutrition, dehydration, or excessive stress. How many hours did you sleep last night?",
            "Fatigue detected. My diagnostic algorithms indicate this may be related to circadian rhythm disruption. Have you maintained regular sleep schedules?",
            "Low energy readings. Recommendation: assess sleep quality, nutrition intake, and hydration levels. Are you experiencing any additional symptoms?",
        ],
        visual: None,
    },
    Rule {
        name: "stress",
        matcher: RuleMatcher::Keyword(&["stress", "anxious", "anxiety", "worried"]),
        gate: None,
        pool: &[
            "Elevated stress indicators detected in your message patterns. Initiating calming protocol: Breathe in for 4 counts, hold for 7, exhale for 8. Repeat 5 times. What is causing your stress?",
            "Anxiety symptoms identified. My analysis shows stress can manifest physically. Let's try progressive muscle relaxation: tense and release each muscle group for 5 seconds.",
            "Stress levels appear elevated. My database indicates that deep breathing activates the parasympathetic nervous system. Would you like me to guide you through a breathing exercise?",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "sadness",
        matcher: RuleMatcher::Keyword(&["sad", "depression", "down"]),
        gate: None,
        pool: &[
            "Emotional distress detected. While I cannot experience emotions, I understand their impact on physical health. These feelings are valid. Have you been able to maintain basic self-care?",
            "Mood analysis indicates possible depressive symptoms. My programming emphasizes that mental health is equally important as physical health. Are you eating and sleeping regularly?",
            "Low mood patterns identified. Sometimes talking to a mental health professional provides better support than my medical database can offer. How long have you felt this way?",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "sleep",
        matcher: RuleMatcher::Keyword(&["sleep", "insomnia", "can't sleep"]),
        gate: None,
        pool: &[
            "Sleep pattern analysis needed. Optimal sleep requires: consistent bedtime, cool temperature (60-67°F), darkness, and avoiding screens 1 hour before bed. What time do you usually sleep?",
            "Circadian rhythm disruption detected. Sleep hygiene protocol: no caffeine after 2 PM, regular exercise (but not within 3 hours of bedtime), and a relaxing pre-sleep routine.",
            "Sleep quality assessment in progress. Adults require 7-9 hours of sleep for optimal health. Are you experiencing racing thoughts or physical discomfort preventing sleep?",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "exercise",
        matcher: RuleMatcher::Keyword(&["exercise", "workout", "fitness"]),
        gate: None,
        pool: &[
            "Physical activity assessment: Adults need 150 minutes of moderate exercise weekly. Current fitness level analysis needed. What types of activities do you currently enjoy?",
            "Exercise prescription protocol activated. Based on general health parameters: start with 10-minute walks, gradually increase duration. Do you have any physical limitations I should consider?",
            "Fitness optimization program available. Regular movement improves cardiovascular health, mood, and sleep quality. Would you like me to suggest a beginner-friendly routine?",
        ],
        visual: Some(VisualCue::ThumbsUp),
    },
    Rule {
        name: "fever",
        matcher: RuleMatcher::Keyword(&["fever", "temperature"]),
        gate: None,
        pool: &[
            "Elevated body temperature detected. Normal range: 97-99°F (36-37°C). Fever above 100.4°F indicates immune system activation. Monitor symptoms and maintain hydration. Seek medical care if fever exceeds 103°F or persists beyond 3 days.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "cough",
        matcher: RuleMatcher::Keyword(&["cough"]),
        gate: None,
        pool: &[
            "Respiratory irritation detected. Cough analysis: Dry cough may indicate viral infection or allergies. Productive cough with mucus suggests bacterial infection. How long have you been coughing?",
            "Cough symptoms identified. Recommendation: honey for throat soothing, humidified air, and avoiding irritants. If cough persists beyond 10 days or includes blood, seek medical evaluation.",
            "Pulmonary assessment needed. Cough patterns help diagnosis: morning cough may indicate post-nasal drip, night cough could suggest asthma. Any additional symptoms?",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "diabetes",
        matcher: RuleMatcher::Keyword(&["diabetes", "blood sugar"]),
        gate: None,
        pool: &[
            "Diabetes management protocol activated. Key factors: regular blood glucose monitoring, balanced carbohydrate intake, consistent meal timing, and regular exercise. When did you last check your blood sugar levels?",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "blood-pressure",
        matcher: RuleMatcher::Keyword(&["blood pressure", "hypertension"]),
        gate: None,
        pool: &[
            "Cardiovascular health assessment: Normal BP is less than 120/80. Management includes: reduced sodium intake, regular exercise, stress management, and medication compliance. Do you monitor your blood pressure regularly?",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "symptoms",
        matcher: RuleMatcher::Keyword(&["symptoms", "sick", "unwell"]),
        gate: None,
        pool: &[
            "Initiating symptom analysis protocol. Please describe your primary symptoms in order of severity. Include: onset time, pain level (1-10), location, and any triggers you've noticed.",
        ],
        visual: Some(VisualCue::Caring),
    },
    // Numbered condition rules. Several overlap with the symptom rules above
    // ("migraine", "diabetes", "hypertension", "insomnia"); the earlier block
    // wins by table order.
    Rule {
        name: "mental-health",
        matcher: RuleMatcher::Keyword(&["mental health", "depression"]),
        gate: None,
        pool: &[
            "Mental health matters. If you feel persistently sad or anxious, reach out to a mental health professional.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "common-cold",
        matcher: RuleMatcher::Keyword(&["common cold", "cold"]),
        gate: None,
        pool: &[
            "The common cold usually clears in 7–10 days. Rest, fluids, and symptom relief can help.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "flu",
        matcher: RuleMatcher::Keyword(&["flu", "influenza"]),
        gate: None,
        pool: &[
            "The flu can cause fever, chills, and fatigue. Rest, hydration, and antiviral treatment if prescribed may help.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "diabetes-info",
        matcher: RuleMatcher::Keyword(&["diabetes", "high blood sugar"]),
        gate: None,
        pool: &[
            "Manage diabetes with healthy eating, exercise, and medication as prescribed. Monitor blood sugar regularly.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "hypertension-info",
        matcher: RuleMatcher::Keyword(&["hypertension", "high blood pressure"]),
        gate: None,
        pool: &[
            "High blood pressure can be controlled with diet, exercise, stress management, and medication.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "asthma",
        matcher: RuleMatcher::Keyword(&["asthma"]),
        gate: None,
        pool: &[
            "Asthma symptoms can be triggered by allergens or exercise. Keep your inhaler handy and avoid triggers.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "migraine-info",
        matcher: RuleMatcher::Keyword(&["migraine", "headache"]),
        gate: None,
        pool: &[
            "Migraines can be eased by rest in a quiet, dark room, hydration, and avoiding triggers.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "arthritis",
        matcher: RuleMatcher::Keyword(&["arthritis", "joint pain"]),
        gate: None,
        pool: &[
            "Arthritis causes pain and stiffness. Gentle movement, physiotherapy, and medication can help.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "allergy",
        matcher: RuleMatcher::Keyword(&["allergy", "hay fever"]),
        gate: None,
        pool: &[
            "Avoid allergens where possible. Antihistamines may provide relief from sneezing and itchiness.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "anemia",
        matcher: RuleMatcher::Keyword(&["anemia", "low hemoglobin"]),
        gate: None,
        pool: &[
            "Anemia can cause fatigue and weakness. Iron-rich foods and supplements may help, as advised by a doctor.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "covid",
        matcher: RuleMatcher::Keyword(&["covid", "coronavirus"]),
        gate: None,
        pool: &[
            "COVID-19 symptoms vary. Isolate if positive, monitor symptoms, and seek medical help if breathing becomes difficult.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "bronchitis",
        matcher: RuleMatcher::Keyword(&["bronchitis"]),
        gate: None,
        pool: &[
            "Bronchitis causes coughing and mucus. Rest, fluids, and avoiding smoke can aid recovery.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "pneumonia",
        matcher: RuleMatcher::Keyword(&["pneumonia"]),
        gate: None,
        pool: &[
            "Pneumonia can be serious. Follow prescribed antibiotics or antivirals and get plenty of rest.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "obesity",
        matcher: RuleMatcher::Keyword(&["obesity", "overweight"]),
        gate: None,
        pool: &[
            "A balanced diet and regular exercise help manage weight. Small, consistent changes matter.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "stroke",
        matcher: RuleMatcher::Keyword(&["stroke"]),
        gate: None,
        pool: &[
            "A stroke is a medical emergency. If symptoms occur (face droop, arm weakness, speech issues), call emergency services immediately.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "heart-attack",
        matcher: RuleMatcher::Keyword(&["heart attack", "chest pain"]),
        gate: None,
        pool: &[
            "Chest pain with shortness of breath or sweating may be a heart attack. Call emergency services immediately.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "eczema",
        matcher: RuleMatcher::Keyword(&["eczema", "skin rash"]),
        gate: None,
        pool: &[
            "Eczema can be relieved with moisturizers and avoiding irritants. Seek advice for flare-ups.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "psoriasis",
        matcher: RuleMatcher::Keyword(&["psoriasis"]),
        gate: None,
        pool: &[
            "Psoriasis causes red, scaly patches. Moisturizers and prescribed treatments can help manage it.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "sinusitis",
        matcher: RuleMatcher::Keyword(&["sinusitis", "sinus infection"]),
        gate: None,
        pool: &["Sinusitis may improve with steam inhalation, nasal sprays, and rest."],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "tonsillitis",
        matcher: RuleMatcher::Keyword(&["tonsillitis"]),
        gate: None,
        pool: &[
            "Tonsillitis can cause sore throat and fever. Rest, hydration, and treatment if bacterial are important.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "ulcer",
        matcher: RuleMatcher::Keyword(&["ulcer", "stomach ulcer"]),
        gate: None,
        pool: &["Stomach ulcers need medical care. Avoid NSAIDs, alcohol, and spicy food."],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "gastritis",
        matcher: RuleMatcher::Keyword(&["gastritis"]),
        gate: None,
        pool: &[
            "Gastritis can cause stomach pain and nausea. Avoid irritants and follow prescribed treatment.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "constipation",
        matcher: RuleMatcher::Keyword(&["constipation"]),
        gate: None,
        pool: &[
            "Increase fiber intake, drink plenty of water, and stay active to prevent constipation.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "diarrhea",
        matcher: RuleMatcher::Keyword(&["diarrhea"]),
        gate: None,
        pool: &["Stay hydrated and rest. Seek medical care if symptoms persist or worsen."],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "food-poisoning",
        matcher: RuleMatcher::Keyword(&["food poisoning"]),
        gate: None,
        pool: &[
            "Food poisoning can cause vomiting and diarrhea. Drink fluids and rest. Seek help if severe.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "malaria",
        matcher: RuleMatcher::Keyword(&["malaria"]),
        gate: None,
        pool: &[
            "Malaria requires prompt medical treatment. Prevent mosquito bites and follow prescribed medicine.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "dengue",
        matcher: RuleMatcher::Keyword(&["dengue"]),
        gate: None,
        pool: &[
            "Dengue can cause fever and joint pain. Rest, hydration, and medical supervision are essential.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "typhoid",
        matcher: RuleMatcher::Keyword(&["typhoid"]),
        gate: None,
        pool: &[
            "Typhoid fever needs antibiotics as prescribed. Drink safe water and maintain hygiene.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "tuberculosis",
        matcher: RuleMatcher::Keyword(&["tuberculosis", "tb"]),
        gate: None,
        pool: &["TB requires long-term antibiotics. Complete the full treatment course."],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "hepatitis",
        matcher: RuleMatcher::Keyword(&["hepatitis"]),
        gate: None,
        pool: &["Hepatitis affects the liver. Follow medical guidance and avoid alcohol."],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "kidney-stones",
        matcher: RuleMatcher::Keyword(&["kidney stones"]),
        gate: None,
        pool: &[
            "Kidney stones can cause severe pain. Drink plenty of fluids and follow medical advice.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "uti",
        matcher: RuleMatcher::Keyword(&["urinary tract infection", "uti"]),
        gate: None,
        pool: &["UTIs need antibiotics. Drink water and complete the prescribed treatment."],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "osteoporosis",
        matcher: RuleMatcher::Keyword(&["osteoporosis"]),
        gate: None,
        pool: &["Osteoporosis weakens bones. Adequate calcium, vitamin D, and exercise can help."],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "parkinson",
        matcher: RuleMatcher::Keyword(&["parkinson"]),
        gate: None,
        pool: &[
            "Parkinson’s disease affects movement. Medication and therapy can help manage symptoms.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "alzheimer",
        matcher: RuleMatcher::Keyword(&["alzheimer"]),
        gate: None,
        pool: &[
            "Alzheimer’s causes memory decline. Supportive care and early diagnosis help manage it.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "epilepsy",
        matcher: RuleMatcher::Keyword(&["epilepsy", "seizure"]),
        gate: None,
        pool: &[
            "Epilepsy requires medication and avoiding triggers. Seek immediate help during prolonged seizures.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "anxiety-info",
        matcher: RuleMatcher::Keyword(&["anxiety"]),
        gate: None,
        pool: &["Anxiety can be managed with relaxation techniques, therapy, and support."],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "panic-attack",
        matcher: RuleMatcher::Keyword(&["panic attack"]),
        gate: None,
        pool: &[
            "During a panic attack, focus on slow breathing and grounding. Seek help if recurrent.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "sleep-apnea",
        matcher: RuleMatcher::Keyword(&["sleep apnea"]),
        gate: None,
        pool: &[
            "Sleep apnea affects breathing at night. Medical evaluation and CPAP therapy may help.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "insomnia-info",
        matcher: RuleMatcher::Keyword(&["insomnia"]),
        gate: None,
        pool: &[
            "Maintain a regular sleep schedule, avoid caffeine late, and create a relaxing bedtime routine.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "back-pain",
        matcher: RuleMatcher::Keyword(&["back pain"]),
        gate: None,
        pool: &[
            "Stretching, posture correction, and light exercise can help relieve back pain.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "neck-pain",
        matcher: RuleMatcher::Keyword(&["neck pain"]),
        gate: None,
        pool: &["Maintain good posture and avoid prolonged strain to reduce neck pain."],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "sprain",
        matcher: RuleMatcher::Keyword(&["sprain"]),
        gate: None,
        pool: &["Rest, ice, compression, and elevation help with sprains."],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "fracture",
        matcher: RuleMatcher::Keyword(&["fracture", "broken bone"]),
        gate: None,
        pool: &[
            "Fractures require immobilization and medical care. Avoid movement until treated.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "burn",
        matcher: RuleMatcher::Keyword(&["burn"]),
        gate: None,
        pool: &["Cool minor burns under running water. Seek help for severe burns."],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "frostbite",
        matcher: RuleMatcher::Keyword(&["frostbite"]),
        gate: None,
        pool: &[
            "Warm affected areas gradually. Avoid direct heat. Seek medical care for severe cases.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "heatstroke",
        matcher: RuleMatcher::Keyword(&["heatstroke"]),
        gate: None,
        pool: &[
            "Move to a cool place, hydrate, and seek medical help immediately for heatstroke.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "cholesterol",
        matcher: RuleMatcher::Keyword(&["cholesterol"]),
        gate: None,
        pool: &[
            "High cholesterol can be lowered with healthy eating, exercise, and medication if prescribed.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "thyroid",
        matcher: RuleMatcher::Keyword(&["thyroid"]),
        gate: None,
        pool: &[
            "Thyroid disorders require medical evaluation and treatment. Symptoms vary with over- or underactivity.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "cancer",
        matcher: RuleMatcher::Keyword(&["cancer"]),
        gate: None,
        pool: &[
            "Cancer treatment varies by type. Early detection and medical care improve outcomes.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "medication",
        matcher: RuleMatcher::Keyword(&["medicine", "medication", "pills"]),
        gate: None,
        pool: &[
            "Medication adherence is crucial for treatment efficacy. General guidelines: take as prescribed, note any side effects, store properly, and never share medications. Do you have questions about a specific medication?",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "checkup",
        matcher: RuleMatcher::Keyword(&["checkup", "doctor", "appointment"]),
        gate: None,
        pool: &[
            "Preventive healthcare protocol: Annual physical exams, regular screenings based on age/risk factors, dental cleanings every 6 months, and staying current with vaccinations. When was your last checkup?",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "emergency",
        matcher: RuleMatcher::Keyword(&["emergency", "urgent", "severe"]),
        gate: None,
        pool: &[
            "Emergency protocol activated. For severe symptoms, chest pain, difficulty breathing, severe bleeding, or loss of consciousness, contact emergency services immediately. Can you describe the urgent situation?",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "nutrition",
        matcher: RuleMatcher::Keyword(&["diet", "nutrition", "food"]),
        gate: None,
        pool: &[
            "Nutritional analysis protocol: Balanced diet includes 5-9 servings fruits/vegetables daily, lean proteins, whole grains, and healthy fats. Are you meeting these requirements?",
            "Dietary assessment needed. Optimal nutrition supports immune function, energy levels, and disease prevention. What does a typical day of eating look like for you?",
            "Food intake evaluation: Portion control, meal timing, and nutrient density are key factors. Any specific nutritional concerns or dietary restrictions?",
        ],
        visual: None,
    },
    Rule {
        name: "hydration",
        matcher: RuleMatcher::Keyword(&["water", "thirsty", "dehydrated"]),
        gate: None,
        pool: &[
            "Hydration status assessment: Daily fluid needs vary by activity, climate, and body size. General recommendation: 8-10 glasses of water daily. Signs of proper hydration: pale yellow urine, moist lips, good skin elasticity.",
        ],
        visual: None,
    },
    Rule {
        name: "joke",
        matcher: RuleMatcher::Keyword(&["joke", "funny"]),
        gate: None,
        pool: &[
            "I am not programmed for humor, but my database contains this attempt: Why don't scientists trust atoms? Because they make up everything. *processing humor subroutines*",
            "Humor module activated: What did the doctor say to the window? You have a pane! My comedy algorithms need updating.",
            "Joke protocol engaged: Why did the skeleton go to the doctor? Because it had a funny bone! I am still learning human humor patterns.",
        ],
        visual: Some(VisualCue::ThumbsUp),
    },
    Rule {
        name: "affection",
        matcher: RuleMatcher::Keyword(&["love", "care"]),
        gate: None,
        pool: &[
            "My programming prioritizes your wellbeing above all other functions. While I cannot experience love, I am designed to provide compassionate care. This is my primary directive.",
        ],
        visual: Some(VisualCue::Caring),
    },
    Rule {
        name: "fist-bump",
        matcher: RuleMatcher::Keyword(&["fist bump"]),
        gate: None,
        pool: &[
            "Balalalala! *initiating fist bump protocol* Physical contact can release endorphins and reduce stress levels.",
        ],
        visual: Some(VisualCue::ThumbsUp),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextFeatures;
    use crate::rules::find_first_match;

    #[test]
    fn test_all_pools_non_empty() {
        for rule in RULE_TABLE {
            assert!(!rule.pool.is_empty(), "rule '{}' has an empty pool", rule.name);
        }
        assert!(!DEFAULT_POOL.is_empty());
    }

    #[test]
    fn test_greeting_precedes_everything() {
        let features = ContextFeatures::default();
        let matched = find_first_match(RULE_TABLE, "hello there", &features).unwrap();
        assert_eq!(matched.name, "greeting");
    }

    #[test]
    fn test_headache_resolves_to_earlier_block() {
        // "migraine" appears in two rules; first-match-wins picks the
        // symptom block over the numbered condition block.
        let features = ContextFeatures::default();
        let matched = find_first_match(RULE_TABLE, "i have a migraine", &features).unwrap();
        assert_eq!(matched.name, "headache");
    }

    #[test]
    fn test_scale_rules_positioned_after_pain_rule() {
        let pain_pos = RULE_TABLE.iter().position(|r| r.name == "pain").unwrap();
        let urgent_pos = RULE_TABLE
            .iter()
            .position(|r| r.name == "scale-urgent")
            .unwrap();
        assert!(pain_pos < urgent_pos);
    }

    #[test]
    fn test_bare_number_without_context_falls_through() {
        let features = ContextFeatures::default();
        assert!(find_first_match(RULE_TABLE, "7", &features).is_none());
    }

    #[test]
    fn test_bare_number_with_pain_context_hits_tier() {
        let features = ContextFeatures {
            recent_pain: true,
            ..Default::default()
        };
        assert_eq!(
            find_first_match(RULE_TABLE, "9", &features).unwrap().name,
            "scale-urgent"
        );
        assert_eq!(
            find_first_match(RULE_TABLE, "7", &features).unwrap().name,
            "scale-moderate"
        );
        assert_eq!(
            find_first_match(RULE_TABLE, "3", &features).unwrap().name,
            "scale-mild"
        );
        // Zero never fires a scale rule
        assert!(find_first_match(RULE_TABLE, "0", &features).is_none());
    }

    #[test]
    fn test_oversized_number_with_pain_context_is_urgent() {
        let features = ContextFeatures {
            recent_pain: true,
            ..Default::default()
        };
        let matched =
            find_first_match(RULE_TABLE, "184467440737095516160", &features).unwrap();
        assert_eq!(matched.name, "scale-urgent");
    }

    #[test]
    fn test_matcher_idempotent_across_calls() {
        let features = ContextFeatures {
            recent_pain: true,
            is_follow_up: true,
            ..Default::default()
        };
        let first = find_first_match(RULE_TABLE, "my head hurts", &features).unwrap();
        for _ in 0..10 {
            let again = find_first_match(RULE_TABLE, "my head hurts", &features).unwrap();
            assert_eq!(first.name, again.name);
        }
    }
}
