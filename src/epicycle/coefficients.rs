// File: ./src/epicycle/coefficients.rs
// Fourier coefficients of the traced signature, as (re, im) pairs.

pub const ZERO: (f64, f64) = (111.1256, 17.9988);

/// `POSITIVE[i]` rotates with frequency `i + 1`.
pub const POSITIVE: [(f64, f64); 128] = [
    (-20.8309, 25.3019),
    (-0.2778, -0.3737),
    (-1.594, -1.2298),
    (-5.9919, 1.7959),
    (-0.4445, 3.8446),
    (1.4656, 2.3848),
    (-0.0703, -0.5096),
    (-1.0343, 0.6342),
    (0.7821, 1.8973),
    (0.1897, -0.3962),
    (-1.0374, 0.4018),
    (-0.4765, 1.3835),
    (0.7722, 0.8422),
    (0.1492, -0.1094),
    (-0.8376, 1.0008),
    (1.0158, 1.1544),
    (0.2514, 0.1703),
    (-0.4657, 0.3374),
    (-0.0461, 0.9675),
    (1.3501, 0.6841),
    (0.3624, -0.3693),
    (-0.2612, 1.0163),
    (0.162, 0.8145),
    (0.6048, 0.0749),
    (-0.1078, 0.0291),
    (0.285, 1.1594),
    (0.8939, 0.2321),
    (0.1137, -0.1535),
    (-0.4399, 0.486),
    (0.1783, 0.5973),
    (0.9758, -0.0609),
    (-0.3201, 0.0626),
    (-0.6974, 0.5217),
    (0.0088, 0.1897),
    (0.0795, 0.0315),
    (-0.6248, -0.5462),
    (-0.3748, 1.0306),
    (-0.0773, 0.155),
    (-0.0075, -0.4093),
    (-0.7168, -0.3762),
    (0.2179, 0.9825),
    (-0.0318, 0.3163),
    (0.092, 0.1795),
    (-0.2854, 0.7243),
    (-0.1914, 0.2148),
    (0.298, 0.28),
    (0.2795, 0.1705),
    (0.8325, 0.6729),
    (-0.2085, 0.1758),
    (0.0946, 0.3975),
    (-0.1105, -0.2913),
    (-0.0767, 0.3457),
    (-0.5176, 0.5178),
    (-0.2593, 0.4222),
    (-0.2344, 0.123),
    (-0.0268, 0.2022),
    (-0.3765, -0.2475),
    (-0.4675, -0.5061),
    (-0.2038, 0.5466),
    (0.4878, 0.0364),
    (0.2859, 0.393),
    (0.3811, 0.3988),
    (-0.4156, -0.1568),
    (-0.0192, 0.1463),
    (-0.5087, 0.1671),
    (-0.0633, 0.2802),
    (0.2065, 0.0666),
    (-0.5361, -0.1512),
    (-0.1226, 0.3112),
    (0.4654, 0.3477),
    (-0.0222, 0.2872),
    (0.2175, 0.2646),
    (0.091, -0.0621),
    (-0.0613, 0.0828),
    (0.1931, 0.1913),
    (-0.0619, 0.2698),
    (-0.0132, -0.245),
    (0.0182, -0.0297),
    (-0.1896, 0.4172),
    (-0.084, 0.0429),
    (-0.1516, 0.0825),
    (-0.2441, -0.1662),
    (-0.1824, 0.4417),
    (0.1078, 0.0926),
    (0.0705, 0.1171),
    (0.1119, 0.2353),
    (-0.0554, 0.3589),
    (-0.1083, -0.0601),
    (-0.0512, 0.1372),
    (-0.029, 0.1967),
    (-0.1217, 0.2637),
    (-0.0069, 0.132),
    (0.0583, 0.0714),
    (-0.0412, 0.1638),
    (0.0147, -0.0616),
    (-0.0623, 0.071),
    (-0.0558, 0.1352),
    (-0.0406, 0.0577),
    (-0.0744, 0.0935),
    (0.009, 0.0364),
    (0.1106, -0.0459),
    (-0.1316, 0.1697),
    (-0.1952, 0.1584),
    (-0.0623, 0.1952),
    (0.0156, 0.0417),
    (0.1159, 0.0961),
    (-0.0814, 0.2111),
    (-0.0255, 0.0558),
    (-0.0919, -0.0014),
    (-0.0532, 0.0294),
    (-0.0516, 0.199),
    (0.0613, -0.0629),
    (-0.1666, 0.0821),
    (-0.1408, 0.0948),
    (-0.0677, 0.1413),
    (0.0439, 0.0292),
    (0.0234, 0.0515),
    (0.0366, 0.0882),
    (0.1271, 0.08),
    (0.0063, -0.0174),
    (-0.0211, 0.0488),
    (-0.0767, 0.0429),
    (0.069, 0.0378),
    (-0.0343, 0.0915),
    (-0.0459, 0.1553),
    (0.0196, 0.055),
    (-0.0519, 0.0433),
    (-0.0994, 0.1127),
];

/// `NEGATIVE[i]` rotates with frequency `-(i + 1)`.
pub const NEGATIVE: [(f64, f64); 128] = [
    (-20.7221, -25.2032),
    (0.5675, 0.6934),
    (-1.9608, 0.2852),
    (-5.268, -3.123),
    (-1.0323, -3.4826),
    (1.8211, -2.1539),
    (-0.1456, -0.6064),
    (-0.3375, -1.0938),
    (-0.2773, -1.9208),
    (0.0749, -0.258),
    (-0.8772, -0.3836),
    (-0.4828, -1.479),
    (0.4111, -0.8084),
    (0.1036, -0.3986),
    (-1.0837, -0.7436),
    (-0.4992, -1.1996),
    (0.2931, -0.2425),
    (-0.6075, 0.0117),
    (-0.4868, -0.8361),
    (-0.1701, -1.5069),
    (0.0841, -0.4805),
    (-1.0682, -0.1274),
    (0.021, -1.0607),
    (0.0887, -0.482),
    (-0.3213, -0.1567),
    (-1.0977, -0.5411),
    (-0.02, -1.1359),
    (-0.0468, -0.3708),
    (-0.5448, -0.1462),
    (0.0627, -0.7268),
    (-0.0479, -0.9866),
    (-0.0856, 0.0243),
    (-0.0376, -0.4178),
    (0.6048, 0.0521),
    (0.3996, -0.3006),
    (0.2744, -0.8049),
    (0.2078, -0.1833),
    (0.6849, 0.1386),
    (0.3177, -0.4327),
    (0.9686, -0.5744),
    (0.1736, 0.0604),
    (0.7037, 0.2295),
    (-0.3529, -0.2961),
    (0.0737, -0.1825),
    (1.0241, 0.3882),
    (-0.0043, -0.0995),
    (-0.7451, -0.738),
    (-0.6095, -0.4898),
    (0.4728, 0.3459),
    (-0.2415, 0.0098),
    (0.3327, -0.4576),
    (-0.0651, 0.3132),
    (-0.0488, 0.2573),
    (-0.2284, -0.1414),
    (0.3856, -0.0614),
    (0.0114, 0.1312),
    (0.4152, -0.2819),
    (0.8912, -0.3168),
    (0.1455, 0.4696),
    (-0.1298, -0.047),
    (-0.3449, 0.4829),
    (-0.7081, 0.1391),
    (0.7148, 0.0278),
    (-0.0256, -0.1034),
    (0.5588, -0.1663),
    (0.6397, -0.1883),
    (0.0656, 0.1252),
    (0.436, -0.5044),
    (0.357, -0.0279),
    (-0.235, 0.5272),
    (0.0221, 0.1723),
    (-0.2918, -0.2125),
    (0.2395, -0.2446),
    (0.1989, -0.0834),
    (-0.3606, -0.2808),
    (0.0406, -0.3839),
    (0.3798, -0.3459),
    (-0.1702, 0.0414),
    (0.5769, 0.1614),
    (0.2095, -0.1583),
    (0.3694, -0.1612),
    (-0.1458, -0.5362),
    (0.3946, -0.0056),
    (0.0412, 0.0044),
    (0.0017, -0.041),
    (-0.0697, -0.0408),
    (0.1101, -0.0255),
    (0.0517, 0.0146),
    (-0.1205, -0.18),
    (0.1935, -0.0495),
    (0.1642, 0.071),
    (-0.04, -0.0969),
    (-0.2266, -0.1685),
    (0.185, 0.103),
    (-0.1134, 0.0001),
    (-0.0458, -0.1518),
    (-0.0347, -0.1263),
    (0.1222, -0.0362),
    (-0.0069, -0.0101),
    (0.0024, -0.0291),
    (0.0419, -0.0751),
    (0.0364, 0.1044),
    (-0.0171, -0.1805),
    (0.1087, -0.0481),
    (0.1742, 0.0353),
    (-0.1539, 0.0715),
    (0.1527, -0.1222),
    (0.1973, -0.1834),
    (-0.0234, -0.0968),
    (-0.0542, -0.0263),
    (0.188, -0.1295),
    (-0.0103, -0.0805),
    (0.0734, -0.0659),
    (0.0621, -0.1981),
    (0.2117, 0.0268),
    (0.0616, 0.0439),
    (-0.0936, -0.0037),
    (0.0998, -0.0566),
    (0.0451, 0.0417),
    (-0.0137, -0.0781),
    (0.0186, -0.047),
    (0.0926, -0.1337),
    (0.0763, 0.0734),
    (-0.0618, -0.126),
    (0.0859, -0.1664),
    (0.106, -0.0388),
    (0.0023, -0.1011),
    (0.0428, -0.1618),
];
