//! Guidance table keyed by (parameter, status).
//!
//! Glucose, hemoglobin, cholesterol, creatinine, blood pressure and BMI carry a
//! separate slightly-high (BORDERLINE_HIGH) entry. Every other parameter only
//! distinguishes the direction of the deviation.

use crate::models::enums::{Deviation, ParameterKey, ParameterStatus};
use crate::models::lab::Recommendations;

const DEFAULT_LIFESTYLE: &[&str] = &[
    "Maintain healthy lifestyle",
    "Regular exercise",
    "Balanced diet",
];
const DEFAULT_FOLLOW_UP: &str = "Routine check-up annually";

/// Guidance for a classified parameter. Never empty.
pub fn recommend(key: ParameterKey, status: ParameterStatus) -> Recommendations {
    match specific_guidance(key, status) {
        Some(rec) if !rec.is_empty() => rec,
        _ => rec(&[], &[], DEFAULT_LIFESTYLE, DEFAULT_FOLLOW_UP),
    }
}

fn specific_guidance(key: ParameterKey, status: ParameterStatus) -> Option<Recommendations> {
    let deviation = status.deviation()?;
    let slightly_high = status == ParameterStatus::BorderlineHigh;

    match key {
        ParameterKey::Glucose => Some(match deviation {
            Deviation::High if slightly_high => rec(
                &[],
                &["Limit sugar and refined carbs", "Prefer whole grains and high-fiber foods"],
                &["Exercise 30 minutes daily", "Keep a log of fasting sugar readings"],
                "Repeat fasting glucose or HbA1c in 3 months",
            ),
            Deviation::High => rec(
                &["Consult doctor for Metformin or insulin therapy if prescribed"],
                &[
                    "Reduce sugar and refined carbs",
                    "Eat more fiber-rich foods",
                    "Include whole grains, vegetables",
                    "Avoid sugary drinks",
                ],
                &[
                    "Exercise 30 minutes daily",
                    "Monitor blood sugar regularly",
                    "Maintain healthy weight",
                ],
                "Visit endocrinologist every 3 months for monitoring",
            ),
            Deviation::Low => rec(
                &[],
                &[
                    "Eat small frequent meals",
                    "Include complex carbohydrates",
                    "Keep glucose tablets handy",
                ],
                &[],
                "Consult doctor within 1 week",
            ),
        }),
        ParameterKey::Hba1c => Some(match deviation {
            Deviation::High => rec(
                &["Discuss diabetes medication review with your doctor"],
                &["Follow a low glycemic index diet", "Limit sweets and refined carbohydrates"],
                &["Exercise at least 150 minutes per week", "Monitor blood sugar at home"],
                "Repeat HbA1c in 3 months",
            ),
            Deviation::Low => rec(
                &[],
                &[],
                &["Watch for symptoms of low blood sugar"],
                "Discuss the low HbA1c result with your doctor",
            ),
        }),
        ParameterKey::Hemoglobin => Some(match deviation {
            Deviation::High if slightly_high => rec(
                &[],
                &[],
                &["Stay well hydrated"],
                "Recheck hemoglobin in 3 months",
            ),
            Deviation::High => rec(
                &[],
                &[],
                &["Stay well hydrated", "Avoid smoking"],
                "Consult hematologist for evaluation",
            ),
            Deviation::Low => rec(
                &[
                    "Iron supplements (Ferrous sulfate 325mg)",
                    "Vitamin B12 and Folic acid supplements",
                ],
                &[
                    "Eat iron-rich foods: spinach, red meat, lentils",
                    "Include Vitamin C for better iron absorption",
                    "Eat eggs, fish, dairy products",
                ],
                &[],
                "Recheck hemoglobin after 1 month",
            ),
        }),
        ParameterKey::Cholesterol => match deviation {
            Deviation::High if slightly_high => Some(rec(
                &[],
                &["Reduce saturated fats", "Include oats, beans, and fruits"],
                &["Exercise 150 minutes per week", "Maintain healthy weight"],
                "Repeat lipid profile in 6 months",
            )),
            Deviation::High => Some(rec(
                &["Statins (Atorvastatin/Rosuvastatin) - as prescribed by doctor"],
                &[
                    "Reduce saturated fats",
                    "Eat more omega-3 fatty acids (fish, walnuts)",
                    "Include oats, beans, and fruits",
                    "Avoid trans fats and fried foods",
                ],
                &["Exercise 150 minutes per week", "Quit smoking", "Maintain healthy weight"],
                "Lipid profile check every 3-6 months",
            )),
            Deviation::Low => None,
        },
        ParameterKey::Ldl => match deviation {
            Deviation::High => Some(rec(
                &["Statin therapy may be considered - consult your doctor"],
                &["Limit saturated and trans fats", "Add soluble fiber (oats, legumes)"],
                &["Exercise regularly", "Quit smoking"],
                "Lipid profile check every 3-6 months",
            )),
            Deviation::Low => None,
        },
        ParameterKey::Hdl => match deviation {
            Deviation::Low => Some(rec(
                &[],
                &["Include healthy fats (olive oil, nuts, fish)", "Avoid trans fats"],
                &["Increase aerobic exercise", "Quit smoking", "Limit alcohol"],
                "Repeat lipid profile in 6 months",
            )),
            Deviation::High => None,
        },
        ParameterKey::Triglycerides => match deviation {
            Deviation::High => Some(rec(
                &["Consult doctor about fibrates or omega-3 therapy if levels stay high"],
                &["Cut sugar and refined carbs", "Limit alcohol", "Eat fatty fish twice a week"],
                &["Exercise regularly", "Lose excess weight"],
                "Repeat lipid profile in 3 months",
            )),
            Deviation::Low => None,
        },
        ParameterKey::Creatinine => Some(match deviation {
            Deviation::High if slightly_high => rec(
                &[],
                &["Stay hydrated", "Limit sodium"],
                &["Avoid NSAIDs and other kidney-straining drugs"],
                "Repeat kidney function test in 1 month",
            ),
            Deviation::High => rec(
                &["Consult nephrologist for appropriate medication"],
                &["Reduce protein intake", "Limit sodium", "Stay hydrated", "Avoid NSAIDs"],
                &["Control blood pressure", "Manage diabetes if present"],
                "Visit nephrologist every 2-3 months",
            ),
            Deviation::Low => rec(
                &[],
                &["Increase protein intake moderately"],
                &[],
                "Routine check-up in 6 months",
            ),
        }),
        ParameterKey::BloodUrea => Some(match deviation {
            Deviation::High => rec(
                &[],
                &["Moderate protein intake", "Stay well hydrated"],
                &["Avoid NSAIDs"],
                "Repeat kidney function test in 1 month",
            ),
            Deviation::Low => rec(
                &[],
                &["Ensure adequate protein intake"],
                &[],
                "Discuss with your doctor at the next visit",
            ),
        }),
        ParameterKey::Sodium => Some(match deviation {
            Deviation::High => rec(
                &[],
                &["Drink adequate water", "Limit salty and processed foods"],
                &[],
                "Repeat electrolytes within 1 week",
            ),
            Deviation::Low => rec(
                &[],
                &["Avoid excessive water intake"],
                &["Review diuretic use with your doctor"],
                "Repeat electrolytes within 1 week",
            ),
        }),
        ParameterKey::Potassium => Some(match deviation {
            Deviation::High => rec(
                &["Review potassium-sparing drugs and ACE inhibitors with your doctor"],
                &["Limit high-potassium foods (bananas, oranges, potatoes)"],
                &[],
                "Repeat potassium test within 1 week",
            ),
            Deviation::Low => rec(
                &["Potassium supplements only if prescribed"],
                &["Eat potassium-rich foods (bananas, spinach, beans)"],
                &[],
                "Repeat potassium test within 1 week",
            ),
        }),
        ParameterKey::Alt | ParameterKey::Ast => match deviation {
            Deviation::High => Some(rec(
                &["Avoid unnecessary medications, especially paracetamol overuse"],
                &[
                    "Avoid alcohol",
                    "Reduce fatty and fried foods",
                    "Eat more fruits and vegetables",
                ],
                &["Maintain healthy weight", "Exercise regularly"],
                "Liver function test in 4-6 weeks; consult hepatologist if persistent",
            )),
            Deviation::Low => None,
        },
        ParameterKey::Bilirubin => match deviation {
            Deviation::High => Some(rec(
                &[],
                &["Avoid alcohol", "Stay hydrated", "Eat a balanced low-fat diet"],
                &[],
                "Consult doctor for liver and bile duct evaluation",
            )),
            Deviation::Low => None,
        },
        ParameterKey::Albumin => Some(match deviation {
            Deviation::High => rec(
                &[],
                &["Stay well hydrated"],
                &[],
                "Recheck albumin at the next visit",
            ),
            Deviation::Low => rec(
                &[],
                &["Increase protein intake (eggs, fish, legumes)"],
                &["Maintain balanced nutrition"],
                "Evaluate liver and kidney function with your doctor",
            ),
        }),
        ParameterKey::BloodPressure => match deviation {
            Deviation::High if slightly_high => Some(rec(
                &[],
                &["Reduce salt intake", "Limit alcohol"],
                &["Exercise regularly", "Reduce stress", "Monitor blood pressure weekly"],
                "Recheck blood pressure in 1 month",
            )),
            Deviation::High => Some(rec(
                &["ACE inhibitors or ARBs - as prescribed", "Beta-blockers if needed"],
                &[
                    "DASH diet - low sodium",
                    "Eat more potassium-rich foods",
                    "Limit alcohol",
                    "Reduce caffeine",
                ],
                &["Exercise regularly", "Reduce stress", "Maintain healthy weight", "Quit smoking"],
                "Monitor BP daily, visit cardiologist every 3 months",
            )),
            // Blood pressure is never classified low.
            Deviation::Low => None,
        },
        ParameterKey::Bmi => Some(match deviation {
            Deviation::High if slightly_high => rec(
                &[],
                &["Portion control", "More vegetables and lean protein"],
                &["Exercise 150 minutes per week"],
                "Track weight monthly",
            ),
            Deviation::High => rec(
                &[],
                &[
                    "Calorie-controlled diet",
                    "Portion control",
                    "More vegetables and lean protein",
                    "Avoid processed foods",
                ],
                &["Regular exercise 5 days/week", "Strength training", "Track food intake"],
                "Nutritionist consultation monthly",
            ),
            Deviation::Low => rec(
                &[],
                &["Increase calorie intake", "Eat nutrient-dense foods", "Protein-rich meals"],
                &[],
                "Consult nutritionist",
            ),
        }),
        ParameterKey::Wbc | ParameterKey::Rbc => Some(rec(
            &[],
            &[],
            &["Adequate rest", "Balanced nutrition", "Avoid infections"],
            "Consult hematologist for detailed blood work",
        )),
    }
}

fn rec(
    medications: &[&str],
    diet: &[&str],
    lifestyle: &[&str],
    follow_up: &str,
) -> Recommendations {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    Recommendations {
        medications: owned(medications),
        diet: owned(diet),
        lifestyle: owned(lifestyle),
        follow_up: follow_up.to_string(),
    }
}
