use common::MapConfig;

/// Radar overview parameters shipped with the game.
pub struct Radar {
    pub display_name: &'static str,
    pub pos_x: f64,
    pub pos_y: f64,
    pub scale: f64,
}

pub static RADARS: phf::Map<&'static str, Radar> = phf::phf_map! {
    "de_ancient" => Radar { display_name: "Ancient", pos_x: -2953.0, pos_y: 2164.0, scale: 5.0 },
    "de_anubis" => Radar { display_name: "Anubis", pos_x: -2796.0, pos_y: 3328.0, scale: 5.22 },
    "de_dust2" => Radar { display_name: "Dust II", pos_x: -2476.0, pos_y: 3239.0, scale: 4.4 },
    "de_inferno" => Radar { display_name: "Inferno", pos_x: -2087.0, pos_y: 3870.0, scale: 4.9 },
    "de_mirage" => Radar { display_name: "Mirage", pos_x: -3230.0, pos_y: 1713.0, scale: 5.0 },
    "de_nuke" => Radar { display_name: "Nuke", pos_x: -3453.0, pos_y: 2887.0, scale: 7.0 },
    "de_overpass" => Radar { display_name: "Overpass", pos_x: -4831.0, pos_y: 1781.0, scale: 5.2 },
    "de_train" => Radar { display_name: "Train", pos_x: -2308.0, pos_y: 2078.0, scale: 4.082077 },
    "de_vertigo" => Radar { display_name: "Vertigo", pos_x: -3168.0, pos_y: 1762.0, scale: 4.0 },
};

pub fn builtin(name: &str) -> Option<MapConfig> {
    let radar = RADARS.get(name)?;

    Some(MapConfig {
        name: name.to_owned(),
        display_name: radar.display_name.to_owned(),
        pos_x: radar.pos_x,
        pos_y: radar.pos_y,
        scale: radar.scale,
        radar_file: format!("{}.png", name),
        lower_radar_file: None,
        radar_width: common::map::DEFAULT_RADAR_SIZE,
        radar_height: common::map::DEFAULT_RADAR_SIZE,
    })
}
