use super::*;

#[test]
fn test_mission_order_is_fixed() {
    let keys: Vec<&str> = ALL_MISSIONS.iter().map(|m| m.key()).collect();
    assert_eq!(keys, vec!["misionAlfa", "misionBeta", "misionGamma"]);
}

#[test]
fn test_mission_labels_follow_order() {
    let labels = mission_labels();
    assert_eq!(labels, vec!["Misión Alfa", "Misión Beta", "Misión Gamma"]);
}
