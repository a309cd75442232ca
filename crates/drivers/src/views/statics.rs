use eframe::egui;

use crate::views::{card_frame, page_heading, BRAND_RED, MUTED};

const SERVICES: [(&str, &str); 4] = [
    (
        "Blood Donation Camps",
        "Regular camps across the region connecting voluntary donors with patients in need.",
    ),
    (
        "Eye Care Checkups",
        "Free screening and referral camps for early detection of avoidable blindness.",
    ),
    (
        "Cancer Awareness",
        "Outreach drives spreading early-detection awareness in underserved communities.",
    ),
    (
        "Thalassemia Support",
        "Transfusion support and counselling for thalassemia-affected families.",
    ),
];

const IMPACT: [(&str, &str, &str); 3] = [
    (
        "50+",
        "Blood Donation Camps",
        "Lives saved through blood donation drives",
    ),
    (
        "15K+",
        "Healthcare Support",
        "Medical aid and healthcare assistance provided",
    ),
    (
        "20K+",
        "Community Programs",
        "Social initiatives and community empowerment",
    ),
];

pub fn services_page(ui: &mut egui::Ui) {
    page_heading(
        ui,
        "Our Services",
        "Healthcare and community programs we run throughout the year.",
    );
    for (title, blurb) in SERVICES {
        card_frame().show(ui, |ui| {
            ui.label(egui::RichText::new(title).size(18.0).strong());
            ui.add_space(4.0);
            ui.label(egui::RichText::new(blurb).size(14.0).color(MUTED));
        });
        ui.add_space(10.0);
    }
}

pub fn impact_page(ui: &mut egui::Ui) {
    page_heading(
        ui,
        "Our Impact",
        "The difference your support makes across our communities.",
    );
    ui.columns(IMPACT.len(), |columns| {
        for (column, (count, title, blurb)) in columns.iter_mut().zip(IMPACT.iter()) {
            card_frame().show(column, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(*count).size(30.0).strong().color(BRAND_RED));
                    ui.label(egui::RichText::new(*title).size(16.0).strong());
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new(*blurb).size(13.0).color(MUTED));
                });
            });
        }
    });
}
