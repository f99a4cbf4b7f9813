//! Fixed fictitious startup content.
//!
//! Every record here is sample data; names, documents and links are made up.
//! The seed exists so the UI has something to render before the user adds
//! real records, and is discarded with the rest of the state on exit.

use crate::model::activity::{CompetitorActivity, MyActivity, PlannedEvent};
use crate::model::birthday::Birthday;
use crate::model::coordinator::{Coordinator, CoordinatorDistrict, CoordinatorProvince};
use crate::model::media::{MediaPost, Sentiment};
use crate::model::party::{Candidate, District, Party, Province, Role};
use crate::model::propaganda::{
    Design, PropagandaDistrict, PropagandaItem, PropagandaProvince,
};
use crate::model::regional::{
    Councilor, DistrictList, Gender, ListMayor, ProvincialList, RegionalBody, RegionalOfficial,
    RegionalRole,
};
use crate::model::ticket::{CongressionalMember, PresidentialCandidate};
use crate::model::troll::{Platform, TrollAccount, TrollTarget};
use crate::store::Dashboard;
use chrono::NaiveDate;

pub(crate) fn seeded_dashboard() -> Dashboard {
    let mut dashboard = Dashboard::new();
    dashboard.parties = seed_parties();
    dashboard.my_activities = seed_my_activities();
    dashboard.competitor_activities =
        seed_competitor_activities(dashboard.parties[1].id);
    dashboard.planned_events = seed_planned_events();
    dashboard.birthdays = seed_birthdays();
    dashboard.media_posts = seed_media_posts();
    dashboard.troll_targets = seed_troll_targets();
    dashboard.regional_body = seed_regional_body();
    dashboard.presidential_candidates = seed_presidential_candidates();
    dashboard.coordinator_provinces = seed_coordinator_provinces();
    dashboard.propaganda_provinces = seed_propaganda_provinces();
    dashboard.designs = seed_designs();
    dashboard
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid")
}

fn seed_parties() -> Vec<Party> {
    let mut fuerza = Party::new("Fuerza Andina", "Partido tradicional");
    fuerza.logo_url = "https://picsum.photos/seed/fuerza/100/100".to_string();

    let mut governor = Candidate::new(fuerza.id, Role::Governor, "Juan Perez Garcia");
    governor.photo_url = "https://picsum.photos/seed/juanperez/200/200".to_string();
    governor.dni = "12345678".to_string();
    governor.nickname = "El Constructor".to_string();
    governor.is_affiliated = true;
    governor.rank = 1;
    fuerza.governor = Some(governor);

    let mut santa = Province::new("Santa", 350_000);
    let mut provincial_mayor =
        Candidate::new(fuerza.id, Role::ProvincialMayor, "Maria Rodriguez");
    provincial_mayor.dni = "87654321".to_string();
    provincial_mayor.nickname = "La Dama de Hierro".to_string();
    provincial_mayor.rank = 3;
    santa.mayors.push(provincial_mayor);

    let mut chimbote = District::new("Chimbote", 210_000);
    let mut district_mayor =
        Candidate::new(fuerza.id, Role::DistrictMayor, "Carlos Mendoza");
    district_mayor.dni = "11223344".to_string();
    district_mayor.nickname = "El Joven Lider".to_string();
    district_mayor.is_affiliated = true;
    district_mayor.rank = 2;
    chimbote.mayors.push(district_mayor);
    santa.districts.push(chimbote);
    santa.districts.push(District::new("Nuevo Chimbote", 98_000));
    fuerza.provinces.push(santa);

    let mut renovacion = Party::new("Renovacion Costera", "Movimiento regional emergente");
    renovacion.logo_url = "https://picsum.photos/seed/renovacion/100/100".to_string();
    renovacion.provinces.push(Province::new("Huaraz", 120_000));

    vec![fuerza, renovacion]
}

fn seed_my_activities() -> Vec<MyActivity> {
    let mut caravan = MyActivity::new("Caravana por el norte", date(2026, 9, 4));
    caravan.link = "https://example.com/caravana".to_string();
    vec![caravan]
}

fn seed_competitor_activities(rival_party_id: crate::model::RecordId) -> Vec<CompetitorActivity> {
    let mut rally = CompetitorActivity::new(rival_party_id, "Mitin en plaza de armas");
    rally.link = "https://example.com/mitin".to_string();
    vec![rally]
}

fn seed_planned_events() -> Vec<PlannedEvent> {
    let mut opening = PlannedEvent::new("Apertura de local de campana", date(2026, 9, 12));
    opening.location = "Av. Pardo 450, Chimbote".to_string();
    opening.description = "Inauguracion con dirigentes provinciales".to_string();
    vec![opening]
}

fn seed_birthdays() -> Vec<Birthday> {
    let mut ana = Birthday::new("Ana Torres", date(1980, 11, 20));
    ana.nickname = "Anita".to_string();
    let mut raul = Birthday::new("Raul Castillo", date(1975, 3, 2));
    raul.nickname = "El Profe".to_string();
    vec![ana, raul]
}

fn seed_media_posts() -> Vec<MediaPost> {
    let mut post = MediaPost::new(
        "Candidato presenta plan vial",
        date(2026, 8, 15),
        Sentiment::Positive,
    );
    post.summary = "Cobertura favorable del plan de carreteras".to_string();
    post.link = "https://example.com/nota-vial".to_string();
    vec![post]
}

fn seed_troll_targets() -> Vec<TrollTarget> {
    let mut target = TrollTarget::new("Defensa de imagen del candidato");
    let mut account = TrollAccount::new("voz_chimbotana", Platform::Facebook);
    account.description = "Replica notas negativas".to_string();
    account.link = "https://facebook.com/voz_chimbotana".to_string();
    target.trolls.push(account);
    vec![target]
}

fn seed_regional_body() -> RegionalBody {
    let mut governor = RegionalOfficial::new(RegionalRole::Governor, "Jorge Salazar");
    governor.dni = "45678912".to_string();
    let mut vice = RegionalOfficial::new(RegionalRole::ViceGovernor, "Carmen Quispe");
    vice.dni = "78912345".to_string();

    let mut first = Councilor::new("Lucia Fernandez", Gender::Female, 1);
    first.province = "Santa".to_string();
    first.profession = "Abogada".to_string();
    first.is_affiliated = true;

    let mut provincial = ProvincialList::new("Santa", 350_000);
    provincial.mayor = Some(ListMayor::new("Pedro Vasquez", Gender::Male));
    provincial.councilors.push(Councilor::new("Miguel Ramos", Gender::Male, 1));

    let mut district = DistrictList::new("Chimbote", 210_000);
    district.mayor = Some(ListMayor::new("Sofia Herrera", Gender::Female));
    provincial.district_lists.push(district);

    RegionalBody {
        governor,
        vice_governor: vice,
        regional_councilors: vec![first],
        provincial_lists: vec![provincial],
    }
}

fn seed_presidential_candidates() -> Vec<PresidentialCandidate> {
    let mut leading = PresidentialCandidate::new("Elena Rivas", "Union Nacional", 1);
    leading.candidate_description = "Lidera intencion de voto en el norte".to_string();
    leading.senator = Some(CongressionalMember::new("Hector Palacios"));
    leading.deputies.push(CongressionalMember::new("Ines Bravo"));
    vec![leading]
}

fn seed_coordinator_provinces() -> Vec<CoordinatorProvince> {
    let mut santa = CoordinatorProvince::new("Santa");
    let mut chimbote = CoordinatorDistrict::new("Chimbote");
    let mut coordinator = Coordinator::new("Rosa Delgado", "+51 943 111 222");
    coordinator.description = "Coordina juntas vecinales del casco urbano".to_string();
    chimbote.coordinators.push(coordinator);
    santa.districts.push(chimbote);
    vec![santa]
}

fn seed_propaganda_provinces() -> Vec<PropagandaProvince> {
    let mut santa = PropagandaProvince::new("Santa");
    let mut chimbote = PropagandaDistrict::new("Chimbote");
    let mut banner = PropagandaItem::new("Panel en Av. Pardo", "+51 943 333 444");
    banner.external_link = "https://maps.example.com/panel-pardo".to_string();
    chimbote.items.push(banner);
    santa.districts.push(chimbote);
    vec![santa]
}

fn seed_designs() -> Vec<Design> {
    let mut banner = Design::new("Banner principal de plaza", "banner");
    banner.dimensions = "3m x 2m".to_string();
    banner.preview_image_url = "https://picsum.photos/seed/banner/300/200".to_string();
    banner.download_link = "https://example.com/descargas/banner.pdf".to_string();
    vec![banner]
}
