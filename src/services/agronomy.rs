//! Static agronomy reference data: the crop database, latitude-based crop
//! recommendations, per-crop maintenance guides and soil pH advice.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CropInfo {
  pub name: &'static str,
  pub season: &'static str,
  pub ideal_temp: &'static str,
  pub water_needed: &'static str,
  pub soil_type: &'static str,
  pub ph_level: &'static str,
  pub duration: &'static str,
  #[serde(rename = "yield")]
  pub yield_estimate: &'static str,
  pub benefits: &'static str,
  pub spacing: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct GrowthStage {
  pub stage: &'static str,
  pub care: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceGuide {
  pub name: &'static str,
  pub stages: Vec<GrowthStage>,
  pub fertilizer: &'static str,
  pub irrigation: &'static str,
  pub pests_diseases: Vec<&'static str>,
  pub harvest_time: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SoilRecommendations {
  pub ph_status: &'static str,
  pub actions: Vec<&'static str>,
  pub suitable_crops: Vec<&'static str>,
}

/// The full crop reference table, optionally filtered by season. The filter is
/// a case-insensitive substring match ("summer" matches "Summer/Monsoon");
/// `None` or an empty string returns everything.
pub fn crop_database(season_filter: Option<&str>) -> Vec<CropInfo> {
  let crops = all_crops();
  match season_filter.map(str::trim).filter(|s| !s.is_empty()) {
    Some(wanted) => {
      let wanted = wanted.to_lowercase();
      crops
        .into_iter()
        .filter(|c| c.season.to_lowercase().contains(&wanted))
        .collect()
    }
    None => crops,
  }
}

/// Crop shortlist for a latitude band, plus a human-readable sentence.
pub fn recommended_crops(latitude: f64) -> (Vec<&'static str>, String) {
  let suitable: Vec<&'static str> = if latitude < 10.0 {
    vec!["Rice", "Sugarcane", "Cotton", "Maize"]
  } else if latitude < 20.0 {
    vec!["Wheat", "Maize", "Cotton", "Soybean"]
  } else if latitude < 30.0 {
    vec!["Wheat", "Maize", "Potato", "Soybean"]
  } else {
    vec!["Wheat", "Potato", "Barley", "Maize"]
  };

  let (last, rest) = suitable.split_last().expect("shortlist is never empty");
  let sentence = format!(
    "Based on your location, we recommend growing {} or {}.",
    rest.join(", "),
    last
  );
  (suitable, sentence)
}

/// Maintenance guide lookup, case-insensitive on the crop name.
pub fn maintenance_guide(crop: &str) -> Option<MaintenanceGuide> {
  match crop.trim().to_lowercase().as_str() {
    "wheat" => Some(MaintenanceGuide {
      name: "Wheat",
      stages: vec![
        GrowthStage {
          stage: "Seedling (0-30 days)",
          care: "Maintain soil moisture at 60-70%, protect seedlings from birds, thin excess shoots for 150-200 plants/m²",
        },
        GrowthStage {
          stage: "Tillering (30-70 days)",
          care: "First nitrogen split of 50kg/ha, first irrigation if no rain, control Phalaris and Avena weeds",
        },
        GrowthStage {
          stage: "Heading (70-100 days)",
          care: "Second nitrogen split 50kg/ha, second irrigation, monitor for rust diseases, spray fungicide if needed",
        },
        GrowthStage {
          stage: "Grain maturation (100-150 days)",
          care: "Third irrigation, reduce water gradually, monitor for grain maturity (hard dough stage), prepare harvesting equipment",
        },
      ],
      fertilizer: "NPK 120:60:40 kg/hectare spread in 3 splits: Basal, Tillering, Heading",
      irrigation: "3-4 irrigations: CRI (Crown Root Initiation), Tillering, Heading, Grain filling",
      pests_diseases: vec![
        "Stem rust (cover with sulfur spray)",
        "Leaf rust (use Propiconazole)",
        "Powdery mildew (spray Wettable Sulfur)",
        "Armyworm (use Bt spray)",
      ],
      harvest_time: "140-150 days, Harvest at moisture 12-14%",
    }),
    "rice" => Some(MaintenanceGuide {
      name: "Rice",
      stages: vec![
        GrowthStage {
          stage: "Nursery (30-40 days)",
          care: "Keep seedbed flooded 5cm, apply 8kg NPK per 100m², watch for blast disease on leaves",
        },
        GrowthStage {
          stage: "Transplanting (40-60 days)",
          care: "Maintain 5-10cm standing water, apply first dose nitrogen, transplant 2-3 seedlings per hill",
        },
        GrowthStage {
          stage: "Vegetative (60-90 days)",
          care: "Keep field continuously flooded, second nitrogen application at 45 days, remove weeds manually",
        },
        GrowthStage {
          stage: "Reproductive (90-150 days)",
          care: "Maintain water for grain filling, third nitrogen at 70 days, monitor for stem borer, drain at maturity",
        },
      ],
      fertilizer: "NPK 120:60:60 kg/hectare in 3 splits: Transplanting, 45 days, 70 days",
      irrigation: "Continuous flooding except for draining 7-10 days before harvest",
      pests_diseases: vec![
        "Blast disease (spray Tricyclazole)",
        "Brown spot (use Carbendazim)",
        "Stem borer (pheromone trap)",
        "Leafhopper (spray Imidacloprid)",
      ],
      harvest_time: "120-150 days, Harvest when 70% grains turned golden yellow",
    }),
    "maize" => Some(MaintenanceGuide {
      name: "Maize",
      stages: vec![
        GrowthStage {
          stage: "Vegetation (0-30 days)",
          care: "Thin to 50-60 plants/m² at 4 leaves stage, apply herbicide for weed control, light irrigation",
        },
        GrowthStage {
          stage: "Vegetative (30-60 days)",
          care: "First nitrogen split 75kg/ha, first earthing-up, second irrigation, remove lower leaves for ventilation",
        },
        GrowthStage {
          stage: "Reproductive (60-100 days)",
          care: "Second nitrogen split 75kg/ha at tassel emergence, third irrigation critical during silking, monitor pollen shed",
        },
        GrowthStage {
          stage: "Maturation (100-120 days)",
          care: "Reduce water gradually, allow cob to dry, monitor for physiological maturity, prepare for harvest",
        },
      ],
      fertilizer: "NPK 150:75:75 kg/hectare spread in 2-3 splits: Basal, 30 days, 60 days",
      irrigation: "3-4 irrigations with critical irrigation at tasseling and silking stages",
      pests_diseases: vec![
        "Armyworm (spray Chlorpyrifos)",
        "Stem borer (release parasitoid)",
        "Turcicum leaf blight (spray Mancozeb)",
        "Rust (remove affected leaves)",
      ],
      harvest_time: "120-130 days at 20-25% grain moisture",
    }),
    "cotton" => Some(MaintenanceGuide {
      name: "Cotton",
      stages: vec![
        GrowthStage {
          stage: "Seedling (0-45 days)",
          care: "Thin to 1 plant per hill (60-75cm spacing), light irrigation to maintain 60-70% soil moisture, mulch to retain moisture",
        },
        GrowthStage {
          stage: "Vegetative (45-90 days)",
          care: "Heavy irrigation 8-10cm water, apply nitrogen 60kg/ha at 45 days, topping at 80-90 days, remove lower leaves at 90 days",
        },
        GrowthStage {
          stage: "Flowering (90-140 days)",
          care: "Critical water period, maintain 15cm soil moisture, apply potassium 60kg/ha, open bolls inspection, pesticide spray weekly",
        },
        GrowthStage {
          stage: "Boll maturation (140-180 days)",
          care: "Reduce irrigation, apply harvest aid at 85% boll opening, defoliate mechanically/chemically, begin picking",
        },
      ],
      fertilizer: "NPK 120:60:90 kg/hectare: 60kg N+P at 45 days, 60kg N+60kg K at 90 days",
      irrigation: "10-12 flood/furrow irrigations with emphasis on flowering to boll opening",
      pests_diseases: vec![
        "Bollworm (spray Bt-cotton approved insecticide)",
        "Jassid (use Yellow sticky traps)",
        "Whitefly (spray Neem oil)",
        "Bacterial blight (remove infected plants)",
      ],
      harvest_time: "160-180 days, Stagger picking for 4-5 weeks",
    }),
    "potato" => Some(MaintenanceGuide {
      name: "Potato",
      stages: vec![
        GrowthStage {
          stage: "Sprouting (0-15 days)",
          care: "Soil temperature 15-16°C optimal, light irrigation 25-30mm, cover seed pieces with 5cm soil to prevent greening",
        },
        GrowthStage {
          stage: "Growth (15-45 days)",
          care: "First ridging at 30 days with 150kg/ha nitrogen, two irrigations of 50-60mm each, monitor for early blight",
        },
        GrowthStage {
          stage: "Tuber formation (45-75 days)",
          care: "THIS IS CRITICAL: consistent water 60-70mm bi-weekly, second nitrogen 150kg/ha, fungicide spray for late blight",
        },
        GrowthStage {
          stage: "Maturation (75-90 days)",
          care: "Reduce irrigation gradually, top-dressing cease, allow skins to harden, harvest when 80% soil removed tubers visible",
        },
      ],
      fertilizer: "NPK 60:120:120 kg/hectare: 150kg N (3 splits), full P+K basal, plus 40kg/ha MgSO4",
      irrigation: "Sprinkler preferred, 4-6 irrigations of 50-60mm at 10-15 days interval",
      pests_diseases: vec![
        "Late blight (spray Mancozeb or Metalaxyl)",
        "Early blight (spray Chlorothalonil)",
        "Wireworm (use Carbofuran)",
        "Aphids (spray Imidacloprid)",
      ],
      harvest_time: "70-90 days depending on variety, Harvest at 12-14% soil moisture",
    }),
    "tomato" => Some(MaintenanceGuide {
      name: "Tomato",
      stages: vec![
        GrowthStage {
          stage: "Seedling (0-30 days)",
          care: "Controlled greenhouse at 20-25°C, maintain 60-70% humidity, water mist 2-3 times daily, shade if needed",
        },
        GrowthStage {
          stage: "Transplanting (30-45 days)",
          care: "Harden seedlings gradually, transplant at 45 days (4-5 true leaves), spacing 60x45cm, mulch immediately",
        },
        GrowthStage {
          stage: "Flowering (45-60 days)",
          care: "Install support structure/staking, prune lower leaves, remove suckers, nutrient spray (B+Zn), bee activity check",
        },
        GrowthStage {
          stage: "Fruiting (60-85 days)",
          care: "Regular drip irrigation (5-6cm water weekly), harvest when breaker stage color shows, continue picking for 8-10 weeks",
        },
      ],
      fertilizer: "NPK 100:150:100 kg/hectare: Full P+K basal, N split in 4-5 doses at 15-20 days interval",
      irrigation: "Drip preferred, daily irrigation to maintain moisture 70-80%, avoid wetting foliage",
      pests_diseases: vec![
        "Early blight (spray Chlorothalonil)",
        "Late blight (spray Mancozeb)",
        "Whitefly (use Yellow traps)",
        "Fruit borer (install pheromone trap)",
      ],
      harvest_time: "60-85 days from transplanting, Multiple harvests over 8-10 weeks",
    }),
    "sugarcane" => Some(MaintenanceGuide {
      name: "Sugarcane",
      stages: vec![
        GrowthStage {
          stage: "Germination (0-60 days)",
          care: "Plant setts 2-3 buds deep, 75cm row spacing, irrigation at 3-4 days interval, mulch with straw to keep 70% moisture",
        },
        GrowthStage {
          stage: "Tillering (60-180 days)",
          care: "First irrigation at 30 days, dense canopy formation, first nitrogen split 80kg/ha, light cultivation to remove weeds",
        },
        GrowthStage {
          stage: "Elongation (180-270 days)",
          care: "Critical growth period, furrow irrigation, second nitrogen 80kg/ha, trashing (lower leaf removal), no stagnant water",
        },
        GrowthStage {
          stage: "Maturation (270-360 days)",
          care: "Reduce nitrogen, final irrigation 2-3 months before harvest, trash completely, monitor sucrose accumulation",
        },
      ],
      fertilizer: "NPK 200:120:120 kg/hectare: 100kg N at 30 days, 100kg N at 150 days, full K+P basal with FYM 20-25 tons/ha",
      irrigation: "Furrow irrigation 8-12 times, first at 30 days, avoid waterlogging during initiation phase",
      pests_diseases: vec![
        "Shoot borer (use Neem oil spray)",
        "Scale insect (release parasitoid)",
        "Red rot (use resistant varieties)",
        "Smut (hot water treatment for seeds)",
      ],
      harvest_time: "12-14 months, Harvest when mature stalks are 9-10 months old",
    }),
    "soybean" => Some(MaintenanceGuide {
      name: "Soybean",
      stages: vec![
        GrowthStage {
          stage: "Germination (0-10 days)",
          care: "Seed treated with Rhizobium culture, sow when soil temp 20-25°C, light irrigation after sowing, ensure 70% field capacity",
        },
        GrowthStage {
          stage: "Vegetative (10-45 days)",
          care: "Thin to optimal plant population 50-60 plants/m², one irrigation at 30 days if needed, hand weeding 2-3 times",
        },
        GrowthStage {
          stage: "Reproductive (45-80 days)",
          care: "Critical water period during flowering & pod filling (60-80 days), 1-2 irrigations of 50mm, no water stress, monitor for pests",
        },
        GrowthStage {
          stage: "Maturation (80-110 days)",
          care: "Reduce water 30 days before harvest, monitor pod color change to brown, remove lower third of leaves for harvesting",
        },
      ],
      fertilizer: "NPK 0:60:40 kg/hectare (N from Rhizobium symbiosis), apply full P+K basal, Seed inoculation with Rhizobium bacteria essential",
      irrigation: "1-2 irrigations, critical at flowering and early pod formation stages",
      pests_diseases: vec![
        "Pod borer (spray Formothion)",
        "Yellow mosaic virus (use resistant variety)",
        "Anthracnose (spray Carbendazim)",
        "Leaf roller (hand pick)",
      ],
      harvest_time: "100-120 days, Harvest when 80% pods turned brown and seed rattles",
    }),
    _ => None,
  }
}

/// Soil pH classification with correction actions and suitable crops.
pub fn soil_health(ph_value: f64) -> SoilRecommendations {
  if ph_value < 5.5 {
    SoilRecommendations {
      ph_status: "Very Acidic",
      actions: vec![
        "Add lime to increase pH",
        "Apply 2-3 tons/hectare calcium carbonate",
        "Avoid acid-loving species initially",
      ],
      suitable_crops: vec!["Potato", "Strawberry"],
    }
  } else if ph_value < 6.0 {
    SoilRecommendations {
      ph_status: "Acidic",
      actions: vec!["Apply 1-2 tons/hectare lime", "Monitor soil annually", "Good drainage needed"],
      suitable_crops: vec!["Wheat", "Potato", "Rye"],
    }
  } else if ph_value < 7.0 {
    SoilRecommendations {
      ph_status: "Slightly Acidic (Good)",
      actions: vec!["Maintain current pH", "Regular soil testing", "Add organic matter"],
      suitable_crops: vec!["Most crops"],
    }
  } else if ph_value < 8.0 {
    SoilRecommendations {
      ph_status: "Neutral to Slightly Alkaline (Ideal)",
      actions: vec![
        "Excellent for most crops",
        "Monitor micronutrient availability",
        "Maintain with organic matter",
      ],
      suitable_crops: vec!["Wheat", "Rice", "Maize", "Sugarcane"],
    }
  } else {
    SoilRecommendations {
      ph_status: "Alkaline",
      actions: vec!["Add sulfur to lower pH", "Incorporate organic matter", "Improve drainage"],
      suitable_crops: vec!["Bajra", "Gram"],
    }
  }
}

fn all_crops() -> Vec<CropInfo> {
  vec![
    CropInfo {
      name: "Wheat",
      season: "Winter",
      ideal_temp: "15-25°C",
      water_needed: "400-500mm",
      soil_type: "Well-drained loam",
      ph_level: "6.0-7.5",
      duration: "120-150 days",
      yield_estimate: "4-5 tons/hectare",
      benefits: "High protein, long shelf-life, global demand",
      spacing: "20x10 cm, 150-200 plants/m²",
    },
    CropInfo {
      name: "Rice",
      season: "Summer/Monsoon",
      ideal_temp: "20-30°C",
      water_needed: "1000-1500mm",
      soil_type: "Clay/clayey loam",
      ph_level: "5.5-7.5",
      duration: "90-150 days",
      yield_estimate: "4-6 tons/hectare",
      benefits: "High yield, stable crop, good market value",
      spacing: "20x15 cm, planting 2-3 seedlings per hill",
    },
    CropInfo {
      name: "Maize",
      season: "Spring/Summer",
      ideal_temp: "21-27°C",
      water_needed: "500-800mm",
      soil_type: "Well-drained loam",
      ph_level: "5.5-7.0",
      duration: "90-120 days",
      yield_estimate: "5-8 tons/hectare",
      benefits: "Multiple uses (grain, fodder, silage), export crop",
      spacing: "60x25 cm, 60-75 plants/m²",
    },
    CropInfo {
      name: "Cotton",
      season: "Spring",
      ideal_temp: "21-30°C",
      water_needed: "500-750mm",
      soil_type: "Well-drained black soil",
      ph_level: "6.0-7.5",
      duration: "160-180 days",
      yield_estimate: "1.5-2.5 tons/hectare",
      benefits: "High value crop, multiple byproducts",
      spacing: "100-120 cm rows, 60-75 cm in row",
    },
    CropInfo {
      name: "Sugarcane",
      season: "Year-round",
      ideal_temp: "20-30°C",
      water_needed: "1200-1500mm",
      soil_type: "Deep loam/clay loam",
      ph_level: "5.5-8.0",
      duration: "10-12 months",
      yield_estimate: "50-60 tons/hectare",
      benefits: "High cash crop, by-products value, long season",
      spacing: "75-100 cm row, 2 buds per sett",
    },
    CropInfo {
      name: "Soybean",
      season: "Summer",
      ideal_temp: "20-30°C",
      water_needed: "450-650mm",
      soil_type: "Well-drained loam",
      ph_level: "6.0-7.5",
      duration: "90-110 days",
      yield_estimate: "2-3 tons/hectare",
      benefits: "High protein, nitrogen fixation, export value",
      spacing: "45x15 cm, 50-60 plants/m²",
    },
    CropInfo {
      name: "Tomato",
      season: "Spring/Fall",
      ideal_temp: "20-25°C",
      water_needed: "400-600mm",
      soil_type: "Well-drained fertile loam",
      ph_level: "6.0-6.8",
      duration: "70-85 days",
      yield_estimate: "30-50 tons/hectare",
      benefits: "High market value, multiple harvests, processing use",
      spacing: "60x45 cm, staked system",
    },
    CropInfo {
      name: "Potato",
      season: "Winter/Spring",
      ideal_temp: "15-20°C",
      water_needed: "400-600mm",
      soil_type: "Loose well-drained soil",
      ph_level: "5.5-7.0",
      duration: "70-90 days",
      yield_estimate: "20-30 tons/hectare",
      benefits: "High nutritive value, staple food, fast returns",
      spacing: "60x20 cm, 75cm rows",
    },
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_season_filter_returns_full_set() {
    assert_eq!(crop_database(None).len(), 8);
    assert_eq!(crop_database(Some("")).len(), 8);
    assert_eq!(crop_database(Some("  ")).len(), 8);
  }

  #[test]
  fn season_filter_matches_substrings_case_insensitively() {
    let summer: Vec<&str> = crop_database(Some("summer")).iter().map(|c| c.name).collect();
    assert!(summer.contains(&"Rice")); // "Summer/Monsoon"
    assert!(summer.contains(&"Maize")); // "Spring/Summer"
    assert!(summer.contains(&"Soybean"));
    assert!(!summer.contains(&"Wheat"));

    let winter: Vec<&str> = crop_database(Some("Winter")).iter().map(|c| c.name).collect();
    assert_eq!(winter, vec!["Wheat", "Potato"]);
  }

  #[test]
  fn recommendations_follow_latitude_bands() {
    assert_eq!(recommended_crops(5.0).0, vec!["Rice", "Sugarcane", "Cotton", "Maize"]);
    assert_eq!(recommended_crops(15.0).0, vec!["Wheat", "Maize", "Cotton", "Soybean"]);
    assert_eq!(recommended_crops(25.0).0, vec!["Wheat", "Maize", "Potato", "Soybean"]);
    assert_eq!(recommended_crops(45.0).0, vec!["Wheat", "Potato", "Barley", "Maize"]);

    let (_, sentence) = recommended_crops(45.0);
    assert_eq!(
      sentence,
      "Based on your location, we recommend growing Wheat, Potato, Barley or Maize."
    );
  }

  #[test]
  fn guide_lookup_is_case_insensitive() {
    assert_eq!(maintenance_guide("wheat").unwrap().name, "Wheat");
    assert_eq!(maintenance_guide("Sugarcane").unwrap().name, "Sugarcane");
    assert!(maintenance_guide("Dragonfruit").is_none());
  }

  #[test]
  fn guides_are_complete() {
    for crop in ["Wheat", "Rice", "Maize", "Cotton", "Potato", "Tomato", "Sugarcane", "Soybean"] {
      let guide = maintenance_guide(crop).unwrap();
      assert_eq!(guide.stages.len(), 4, "{} guide missing stages", crop);
      assert_eq!(guide.pests_diseases.len(), 4);
      assert!(!guide.fertilizer.is_empty());
      assert!(!guide.harvest_time.is_empty());
    }
  }

  #[test]
  fn soil_ph_classification_matches_documented_bands() {
    assert_eq!(soil_health(4.0).ph_status, "Very Acidic");
    assert!(soil_health(4.0).actions.iter().any(|a| a.contains("lime")));
    assert_eq!(soil_health(5.7).ph_status, "Acidic");
    assert_eq!(soil_health(6.5).ph_status, "Slightly Acidic (Good)");
    assert_eq!(soil_health(7.0).ph_status, "Neutral to Slightly Alkaline (Ideal)");
    assert_eq!(soil_health(9.0).ph_status, "Alkaline");
    assert!(soil_health(9.0).actions.iter().any(|a| a.contains("sulfur")));
  }
}
