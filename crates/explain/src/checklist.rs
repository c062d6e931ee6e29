use serde::Serialize;

/// A group of due-diligence checks for the buyer.
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistSection {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

static CHECKLIST: [ChecklistSection; 4] = [
    ChecklistSection {
        category: "Documents",
        items: &[
            "Verify RC (Registration Certificate) is original",
            "Check for hypothecation - ensure NOC if loan was taken",
            "Verify insurance policy and claim history",
            "Check for challan/pending fines",
            "Verify PUC (Pollution Under Control) certificate",
        ],
    },
    ChecklistSection {
        category: "Physical Inspection",
        items: &[
            "Check body panels for dents, scratches, repaint",
            "Look for uneven panel gaps (accident indicator)",
            "Check tyre condition and brand consistency",
            "Inspect under the car for rust/oil leaks",
            "Check interior wear - seats, steering, pedals",
        ],
    },
    ChecklistSection {
        category: "Mechanical",
        items: &[
            "Cold start the engine",
            "Check for unusual sounds or vibrations",
            "Test all gears and clutch/brake feel",
            "Verify AC cooling performance",
            "Test all electrical - windows, locks, lights, infotainment",
        ],
    },
    ChecklistSection {
        category: "Verification",
        items: &[
            "Match chassis/engine number with RC",
            "Verify service history at authorized dealer",
            "Run vehicle history check (Vahaan portal)",
            "Confirm current owner matches RC",
            "Take extended test drive in various conditions",
        ],
    },
];

pub fn checklist() -> &'static [ChecklistSection] {
    &CHECKLIST
}
