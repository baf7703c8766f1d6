//! Exercises shipped with the app.

use super::exercise::{ExerciseCategory as C, MuscleGroup as M};

/// `(id, name, category, muscle group, equipment)`
pub(super) const BUILT_IN: &[(&str, &str, C, M, &str)] = &[
    ("ex-bench-press", "Bankdrücken", C::Barbell, M::Chest, "Langhantel"),
    ("ex-incline-bench", "Schrägbankdrücken", C::Barbell, M::Chest, "Langhantel"),
    ("ex-decline-bench", "Negativ-Bankdrücken", C::Barbell, M::Chest, "Langhantel"),
    ("ex-db-bench", "KH Bankdrücken", C::Dumbbell, M::Chest, "Kurzhanteln"),
    ("ex-db-incline-bench", "KH Schrägbankdrücken", C::Dumbbell, M::Chest, "Kurzhanteln"),
    ("ex-db-fly", "KH Fliegende", C::Dumbbell, M::Chest, "Kurzhanteln"),
    ("ex-cable-crossover", "Cable Crossover", C::Cable, M::Chest, "Kabelzug"),
    ("ex-push-up", "Liegestütze", C::Bodyweight, M::Chest, "Körpergewicht"),
    ("ex-chest-press-machine", "Brustpresse Maschine", C::Machine, M::Chest, "Maschine"),
    ("ex-pec-deck", "Butterfly Maschine", C::Machine, M::Chest, "Maschine"),
    ("ex-pull-up", "Klimmzüge", C::Bodyweight, M::Back, "Klimmzugstange"),
    ("ex-lat-pulldown", "Latzug", C::Cable, M::Back, "Kabelzug"),
    ("ex-barbell-row", "Langhantelrudern", C::Barbell, M::Back, "Langhantel"),
    ("ex-db-row", "KH Rudern einarmig", C::Dumbbell, M::Back, "Kurzhantel"),
    ("ex-seated-cable-row", "Kabelrudern sitzend", C::Cable, M::Back, "Kabelzug"),
    ("ex-t-bar-row", "T-Bar Rudern", C::Barbell, M::Back, "Langhantel"),
    ("ex-deadlift", "Kreuzheben", C::Barbell, M::Back, "Langhantel"),
    ("ex-face-pull", "Face Pulls", C::Cable, M::Back, "Kabelzug"),
    ("ex-ohp", "Schulterdrücken LH", C::Barbell, M::Shoulders, "Langhantel"),
    ("ex-db-ohp", "Schulterdrücken KH", C::Dumbbell, M::Shoulders, "Kurzhanteln"),
    ("ex-lateral-raise", "Seitheben", C::Dumbbell, M::Shoulders, "Kurzhanteln"),
    ("ex-front-raise", "Frontheben", C::Dumbbell, M::Shoulders, "Kurzhanteln"),
    ("ex-rear-delt-fly", "Reverse Flys", C::Dumbbell, M::Shoulders, "Kurzhanteln"),
    ("ex-arnold-press", "Arnold Press", C::Dumbbell, M::Shoulders, "Kurzhanteln"),
    ("ex-upright-row", "Aufrechtes Rudern", C::Barbell, M::Shoulders, "Langhantel"),
    ("ex-barbell-curl", "Langhantelcurls", C::Barbell, M::Biceps, "Langhantel"),
    ("ex-db-curl", "KH Curls", C::Dumbbell, M::Biceps, "Kurzhanteln"),
    ("ex-hammer-curl", "Hammercurls", C::Dumbbell, M::Biceps, "Kurzhanteln"),
    ("ex-preacher-curl", "Preacher Curls", C::Dumbbell, M::Biceps, "Kurzhantel"),
    ("ex-cable-curl", "Kabelcurls", C::Cable, M::Biceps, "Kabelzug"),
    ("ex-incline-curl", "Schrägbank Curls", C::Dumbbell, M::Biceps, "Kurzhanteln"),
    ("ex-tricep-pushdown", "Trizepsdrücken Kabel", C::Cable, M::Triceps, "Kabelzug"),
    ("ex-skull-crusher", "Skull Crushers", C::Barbell, M::Triceps, "SZ-Stange"),
    ("ex-overhead-extension", "Überkopf Trizeps", C::Dumbbell, M::Triceps, "Kurzhantel"),
    ("ex-dips", "Dips", C::Bodyweight, M::Triceps, "Dipständer"),
    ("ex-close-grip-bench", "Enges Bankdrücken", C::Barbell, M::Triceps, "Langhantel"),
    ("ex-tricep-kickback", "Trizeps Kickbacks", C::Dumbbell, M::Triceps, "Kurzhantel"),
    ("ex-squat", "Kniebeugen", C::Barbell, M::Quads, "Langhantel"),
    ("ex-front-squat", "Frontkniebeugen", C::Barbell, M::Quads, "Langhantel"),
    ("ex-leg-press", "Beinpresse", C::Machine, M::Quads, "Maschine"),
    ("ex-leg-extension", "Beinstrecker", C::Machine, M::Quads, "Maschine"),
    ("ex-bulgarian-split", "Bulgarische Kniebeugen", C::Dumbbell, M::Quads, "Kurzhanteln"),
    ("ex-hack-squat", "Hack Squat", C::Machine, M::Quads, "Maschine"),
    ("ex-lunges", "Ausfallschritte", C::Dumbbell, M::Quads, "Kurzhanteln"),
    ("ex-rdl", "Rumänisches Kreuzheben", C::Barbell, M::Hamstrings, "Langhantel"),
    ("ex-leg-curl", "Beinbeuger", C::Machine, M::Hamstrings, "Maschine"),
    ("ex-good-morning", "Good Mornings", C::Barbell, M::Hamstrings, "Langhantel"),
    ("ex-nordic-curl", "Nordic Curls", C::Bodyweight, M::Hamstrings, "Körpergewicht"),
    ("ex-db-rdl", "KH Rumänisches Kreuzheben", C::Dumbbell, M::Hamstrings, "Kurzhanteln"),
    ("ex-hip-thrust", "Hip Thrusts", C::Barbell, M::Glutes, "Langhantel"),
    ("ex-glute-bridge", "Glute Bridge", C::Bodyweight, M::Glutes, "Körpergewicht"),
    ("ex-cable-kickback", "Cable Kickbacks", C::Cable, M::Glutes, "Kabelzug"),
    ("ex-standing-calf-raise", "Wadenheben stehend", C::Machine, M::Calves, "Maschine"),
    ("ex-seated-calf-raise", "Wadenheben sitzend", C::Machine, M::Calves, "Maschine"),
    ("ex-plank", "Plank", C::Bodyweight, M::Core, "Körpergewicht"),
    ("ex-hanging-leg-raise", "Hängendes Beinheben", C::Bodyweight, M::Core, "Klimmzugstange"),
    ("ex-cable-crunch", "Kabel Crunches", C::Cable, M::Core, "Kabelzug"),
    ("ex-ab-wheel", "Ab Wheel Rollout", C::Other, M::Core, "Ab Wheel"),
    ("ex-russian-twist", "Russian Twists", C::Bodyweight, M::Core, "Körpergewicht"),
    ("ex-wrist-curl", "Handgelenkbeugen", C::Dumbbell, M::Forearms, "Kurzhantel"),
    ("ex-reverse-wrist-curl", "Reverse Handgelenkbeugen", C::Dumbbell, M::Forearms, "Kurzhantel"),
    ("ex-clean-press", "Clean & Press", C::Barbell, M::FullBody, "Langhantel"),
    ("ex-thruster", "Thrusters", C::Barbell, M::FullBody, "Langhantel"),
    ("ex-burpees", "Burpees", C::Bodyweight, M::FullBody, "Körpergewicht"),
    ("ex-kettlebell-swing", "Kettlebell Swings", C::Kettlebell, M::FullBody, "Kettlebell"),
];
