//! Prompt text sent to the model.

use std::fmt::Write as _;

use ward_air_ward_models::Ward;

/// Shared system prompt.
pub const SYSTEM_PROMPT: &str = "You are an air quality analyst for a municipal ward-level \
     pollution dashboard in India. Answer in plain language for city officials and residents. \
     Base every statement on the readings you are given and do not invent numbers.";

/// Asks for a cause summary and mitigation steps for one ward.
#[must_use]
pub fn ward_analysis(ward: &Ward) -> String {
    let p = &ward.pollutant_breakdown;
    format!(
        "Analyze the air quality for {name} (ID: {id}).\n\
         Current AQI: {aqi} ({category}).\n\
         Primary Sources: {sources}.\n\
         Pollutants: PM2.5: {pm25}, PM10: {pm10}, NO2: {no2}.\n\
         Weather: Temp {temp:.1}C, Wind {wind:.1} km/h.\n\n\
         Provide a concise 3-sentence summary explaining why the pollution is at this level \
         and identify the most likely specific cause (e.g., peak traffic, specific industrial \
         activity, stagnant wind).\n\
         Then provide 3 bullet points for immediate actionable mitigation strategies for the \
         local municipal ward officer.",
        name = ward.name,
        id = ward.id,
        aqi = ward.air_quality_index,
        category = ward.category(),
        sources = ward.primary_sources.join(", "),
        pm25 = p.pm25,
        pm10 = p.pm10,
        no2 = p.no2,
        temp = ward.weather.temperature,
        wind = ward.weather.wind_speed,
    )
}

/// Asks for a 24-hour outlook across all wards.
#[must_use]
pub fn forecast_insights(wards: &[Ward]) -> String {
    let levels = wards
        .iter()
        .map(|w| format!("{}: {}", w.name, w.air_quality_index))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Given the current AQI levels across these wards: {levels}.\n\
         Predict the trend for the next 24 hours assuming typical urban patterns (morning peak, \
         evening peak) and current weather (assume generally stable).\n\
         Highlight which ward needs the most urgent attention tomorrow."
    )
}

/// Wraps a resident's question with compact ward context.
#[must_use]
pub fn chat(query: &str, wards: &[Ward]) -> String {
    let mut context = String::new();
    for (i, w) in wards.iter().enumerate() {
        if i > 0 {
            context.push_str("; ");
        }
        let _ = write!(context, "{}: {} AQI ({})", w.name, w.air_quality_index, w.category());
    }

    format!(
        "You are the voice assistant for the ward air quality dashboard.\n\
         Current Ward Data: {context}.\n\n\
         User Question: \"{query}\"\n\n\
         Answer the user's question concisely (max 2 sentences). If they ask about the worst \
         ward, identify the one with highest AQI. If they ask for advice, give a quick health \
         tip. Speak naturally."
    )
}
