//! End-to-end scenarios for both extraction pipelines

#[cfg(test)]
mod tests {
    use crate::{extract_agenda, extract_speakers, DEFAULT_SPECIALTY};
    use agendex_domain::{AgendaItemType, KnownSpeaker};
    use proptest::prelude::*;

    fn juan() -> Vec<KnownSpeaker> {
        vec![KnownSpeaker::new("s1", "Juan Pérez")]
    }

    #[test]
    fn test_welcome_and_tagged_session() {
        let text = [
            "14/11/2025",
            "08:00",
            "08:10",
            "Bienvenida",
            "09:00",
            "Manejo de Dislipidemia Dr. Juan Pérez",
            "Discusión de casos clínicos.",
        ]
        .join("\n");

        let items = extract_agenda(&text, &juan(), "2025-01-01");
        assert_eq!(items.len(), 2);

        let welcome = &items[0];
        assert_eq!(welcome.title, "Bienvenida");
        assert_eq!(welcome.item_type, AgendaItemType::Welcome);
        assert_eq!(welcome.date, "2025-11-14");
        assert_eq!((welcome.start_time.as_str(), welcome.end_time.as_str()), ("08:00", "08:10"));
        assert!(welcome.speaker_ids.is_empty());

        let session = &items[1];
        assert_eq!(session.title, "Manejo de Dislipidemia");
        assert_eq!(session.item_type, AgendaItemType::Session);
        assert_eq!((session.start_time.as_str(), session.end_time.as_str()), ("09:00", "09:00"));
        assert_eq!(session.speaker_ids, vec!["s1".to_string()]);
        assert_eq!(session.description, "Discusión de casos clínicos.");
    }

    #[test]
    fn test_speaker_tagging_splits_title() {
        let text = "14/11/2025\n10:00\nManejo de riesgo cardiovascular Dr. Juan Pérez";
        let items = extract_agenda(text, &juan(), "2025-01-01");
        assert_eq!(items[0].speaker_ids, vec!["s1".to_string()]);
        assert_eq!(items[0].title, "Manejo de riesgo cardiovascular");
    }

    #[test]
    fn test_no_time_lines_yields_nothing() {
        let text = "Programa científico\nSimposio de cardiología\nInformes en secretaría";
        assert!(extract_agenda(text, &juan(), "2025-01-01").is_empty());
        assert!(extract_agenda("", &juan(), "2025-01-01").is_empty());
    }

    #[test]
    fn test_times_without_date_use_fallback() {
        let items = extract_agenda("8:00\nRegistro de asistentes", &juan(), "2025-01-01");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].date, "2025-01-01");
        assert_eq!(items[0].start_time, "08:00");
    }

    #[test]
    fn test_specialty_marker_and_bio() {
        let text = [
            "Dr. Ana Gómez, Cardiología",
            "Especialista en insuficiencia cardiaca.",
            "Dr. Luis Ruiz",
            "especialidad: Endocrinología",
        ]
        .join("\n");

        let profiles = extract_speakers(&text);
        assert_eq!(profiles.len(), 2);

        assert_eq!(profiles[0].name, "Ana Gómez");
        assert_eq!(profiles[0].specialty, "Cardiología");
        assert_eq!(profiles[0].bio, "Especialista en insuficiencia cardiaca.");

        assert_eq!(profiles[1].name, "Luis Ruiz");
        assert_eq!(profiles[1].specialty, "Endocrinología");
        assert_eq!(profiles[1].bio, "");
    }

    #[test]
    fn test_speaker_fallback_when_no_name_pattern() {
        let profiles = extract_speakers("Ana de la Cruz\nprofesora asociada de medicina");
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, "Ana de la Cruz");
        assert_eq!(profiles[0].specialty, DEFAULT_SPECIALTY);
    }

    #[test]
    fn test_section_propagation() {
        let text = [
            "14/11/2025",
            "SIMPOSIO DE CARDIOLOGÍA",
            "08:00",
            "Conferencia inaugural larga",
            "09:00",
            "Arritmias en la práctica diaria",
            "MÓDULO DE DIABETES",
            "10:00",
            "Insulinoterapia moderna",
        ]
        .join("\n");

        let items = extract_agenda(&text, &[], "2025-01-01");
        let sections: Vec<Option<&str>> = items.iter().map(|i| i.section.as_deref()).collect();
        assert_eq!(
            sections,
            vec![
                Some("SIMPOSIO DE CARDIOLOGÍA"),
                Some("SIMPOSIO DE CARDIOLOGÍA"),
                Some("MÓDULO DE DIABETES"),
            ]
        );
    }

    #[test]
    fn test_output_keeps_source_order() {
        let text = "14/11/2025\n11:00\nTercera en el reloj\n09:00\nPrimera en el reloj";
        let items = extract_agenda(text, &[], "2025-01-01");
        let starts: Vec<&str> = items.iter().map(|i| i.start_time.as_str()).collect();
        assert_eq!(starts, vec!["11:00", "09:00"]);
    }

    proptest! {
        #[test]
        fn prop_sealed_items_have_titles(
            lines in prop::collection::vec("[0-9:/ A-Za-zÁÉáéñ.,-]{0,40}", 0..30)
        ) {
            let text = lines.join("\n");
            for item in extract_agenda(&text, &juan(), "2025-01-01") {
                prop_assert!(!item.title.trim().is_empty());
            }
            for profile in extract_speakers(&text) {
                prop_assert!(!profile.name.trim().is_empty());
            }
        }
    }
}
